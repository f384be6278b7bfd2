use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::Booking;
use crate::repositories::booking_repository::BookingDetail;

// Request para crear una reserva. Los depot ids no se validan contra
// el vehículo ni el operador en el alcance actual.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub pickup_depot_id: Uuid,
    pub dropoff_depot_id: Uuid,
    pub pickup_date: String,
    pub dropoff_date: String,
    #[validate(length(min = 1, message = "guest_name is required"))]
    pub guest_name: String,
    #[validate(email(message = "guest_email must be a valid email"))]
    pub guest_email: String,
    pub guest_phone: Option<String>,
    #[validate(range(min = 1, message = "number_of_people must be at least 1"))]
    pub number_of_people: i32,
}

// Response de creación (201)
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking: Booking,
}

// Response de detalle con nombres joineados
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingDetailResponse {
    pub success: bool,
    pub booking: BookingDetail,
}
