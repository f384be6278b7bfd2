//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos que llegan como texto por la API.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Validar y convertir string a fecha (formato YYYY-MM-DD)
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("Invalid {}: expected YYYY-MM-DD, got '{}'", field, value))
    })
}

/// Validar y convertir string a UUID
pub fn parse_uuid(field: &str, value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value)
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}' is not a valid id", field, value)))
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let valid_date = "2024-06-01";
        assert!(parse_date("pickup_date", valid_date).is_ok());

        let invalid_date = "2024/06/01";
        assert!(parse_date("pickup_date", invalid_date).is_err());

        let nonsense = "not-a-date";
        assert!(parse_date("pickup_date", nonsense).is_err());
    }

    #[test]
    fn test_parse_date_value() {
        let date = parse_date("pickup_date", "2024-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_uuid() {
        let valid_uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert!(parse_uuid("vehicle_id", valid_uuid).is_ok());

        let invalid_uuid = "invalid-uuid";
        assert!(parse_uuid("vehicle_id", invalid_uuid).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("guest_name", "Jane Doe").is_ok());
        assert!(validate_not_empty("guest_name", "").is_err());
        assert!(validate_not_empty("guest_name", "   ").is_err());
    }
}
