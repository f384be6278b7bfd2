//! Controller de reservas
//!
//! La creación re-deriva el precio con el servicio de pricing en lugar
//! de confiar en un total enviado por el cliente, y denormaliza el
//! operador desde el vehículo. La decisión completa (not-found, fechas,
//! total) ocurre antes de tocar la base: si el vehículo no existe no se
//! escribe ninguna fila.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{BookingDetailResponse, CreateBookingRequest, CreateBookingResponse};
use crate::models::booking::BookingStatus;
use crate::models::vehicle::Vehicle;
use crate::repositories::booking_repository::{BookingRepository, NewBooking};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing_service;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_date;

pub struct BookingController {
    vehicles: VehicleRepository,
    bookings: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateBookingRequest) -> Result<CreateBookingResponse, AppError> {
        request.validate()?;

        let vehicle = self.vehicles.find_by_id(request.vehicle_id).await?;
        let new_booking = prepare_booking(vehicle, &request)?;
        let booking = self.bookings.create(new_booking).await?;

        Ok(CreateBookingResponse {
            success: true,
            booking,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingDetailResponse, AppError> {
        let booking = self
            .bookings
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Ok(BookingDetailResponse {
            success: true,
            booking,
        })
    }
}

/// Armar el payload de inserción a partir del vehículo buscado.
/// Parte pura del writer: sin vehículo no hay escritura posible.
fn prepare_booking(
    vehicle: Option<Vehicle>,
    request: &CreateBookingRequest,
) -> Result<NewBooking, AppError> {
    let vehicle = vehicle.ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    let pickup_date = parse_date("pickup_date", &request.pickup_date)?;
    let dropoff_date = parse_date("dropoff_date", &request.dropoff_date)?;

    let days = pricing_service::rental_days(pickup_date, dropoff_date);
    let total_price = pricing_service::total_price(vehicle.price_per_day, days);

    Ok(NewBooking {
        client_id: request.client_id,
        vehicle_id: vehicle.id,
        operator_id: vehicle.operator_id,
        pickup_depot_id: request.pickup_depot_id,
        dropoff_depot_id: request.dropoff_depot_id,
        pickup_date,
        dropoff_date,
        guest_name: request.guest_name.clone(),
        guest_email: request.guest_email.clone(),
        guest_phone: request.guest_phone.clone(),
        number_of_people: request.number_of_people,
        total_price,
        status: BookingStatus::Pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{Transmission, VehicleType};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn sample_vehicle(price_per_day: i64) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            operator_id: Uuid::new_v4(),
            name: "Beach Hopper".to_string(),
            vehicle_type: VehicleType::Campervan,
            transmission: Transmission::Manual,
            sleeps: 2,
            has_toilet: false,
            has_shower: false,
            has_kitchen: true,
            price_per_day: Decimal::new(price_per_day, 0),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn sample_request(vehicle_id: Uuid) -> CreateBookingRequest {
        CreateBookingRequest {
            client_id: Uuid::new_v4(),
            vehicle_id,
            pickup_depot_id: Uuid::new_v4(),
            dropoff_depot_id: Uuid::new_v4(),
            pickup_date: "2024-06-01".to_string(),
            dropoff_date: "2024-06-04".to_string(),
            guest_name: "Jane Doe".to_string(),
            guest_email: "jane@example.com".to_string(),
            guest_phone: None,
            number_of_people: 2,
        }
    }

    #[test]
    fn test_missing_vehicle_is_not_found() {
        let request = sample_request(Uuid::new_v4());
        let result = prepare_booking(None, &request);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_new_booking_derives_price_and_starts_pending() {
        let vehicle = sample_vehicle(100);
        let request = sample_request(vehicle.id);
        let operator_id = vehicle.operator_id;

        let new_booking = prepare_booking(Some(vehicle), &request).unwrap();

        // $100/día por 3 días, estado inicial pending, operador denormalizado
        assert_eq!(new_booking.total_price, Decimal::new(300, 0));
        assert_eq!(new_booking.status, BookingStatus::Pending);
        assert_eq!(new_booking.operator_id, operator_id);
    }

    #[test]
    fn test_invalid_dates_are_rejected() {
        let vehicle = sample_vehicle(100);
        let mut request = sample_request(vehicle.id);
        request.pickup_date = "junio primero".to_string();

        let result = prepare_booking(Some(vehicle), &request);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_request_validation_catches_bad_guest_data() {
        let mut request = sample_request(Uuid::new_v4());
        request.guest_email = "not-an-email".to_string();
        assert!(request.validate().is_err());

        let mut request = sample_request(Uuid::new_v4());
        request.guest_name = String::new();
        assert!(request.validate().is_err());

        let mut request = sample_request(Uuid::new_v4());
        request.number_of_people = 0;
        assert!(request.validate().is_err());
    }
}
