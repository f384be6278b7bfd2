//! Servicio de pricing
//!
//! Cálculo de días de alquiler y precio total. Funciones puras, sin
//! efectos: las usan idénticamente la búsqueda (para anotar cada
//! candidato) y la creación de reservas (para fijar el total persistido).

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Número de días de alquiler entre pickup y dropoff.
///
/// Sobre fechas de calendario la división por día es exacta, así que el
/// ceil del original se reduce a la diferencia entera. No se impone un
/// mínimo: un dropoff anterior al pickup produce cero o negativo.
pub fn rental_days(pickup: NaiveDate, dropoff: NaiveDate) -> i64 {
    (dropoff - pickup).num_days()
}

/// Precio total de la estadía: tarifa diaria × días
pub fn total_price(price_per_day: Decimal, days: i64) -> Decimal {
    price_per_day * Decimal::from(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rental_days_basic() {
        // 2024-06-01 → 2024-06-04 son 3 días de alquiler
        assert_eq!(rental_days(date(2024, 6, 1), date(2024, 6, 4)), 3);
    }

    #[test]
    fn test_rental_days_single_day() {
        assert_eq!(rental_days(date(2024, 6, 1), date(2024, 6, 2)), 1);
    }

    #[test]
    fn test_rental_days_same_day_is_zero() {
        assert_eq!(rental_days(date(2024, 6, 1), date(2024, 6, 1)), 0);
    }

    #[test]
    fn test_rental_days_reversed_goes_negative() {
        // Comportamiento observado: no se rechaza, el conteo sale negativo
        assert_eq!(rental_days(date(2024, 6, 4), date(2024, 6, 1)), -3);
    }

    #[test]
    fn test_rental_days_across_month_boundary() {
        assert_eq!(rental_days(date(2024, 6, 28), date(2024, 7, 3)), 5);
    }

    #[test]
    fn test_total_price_scenario() {
        // Vehículo a $100/día, 2024-06-01 → 2024-06-04: 3 días, $300
        let days = rental_days(date(2024, 6, 1), date(2024, 6, 4));
        let total = total_price(Decimal::new(100, 0), days);
        assert_eq!(total, Decimal::new(300, 0));
    }

    #[test]
    fn test_total_price_scales_linearly() {
        let rate = Decimal::new(8950, 2); // 89.50
        for days in 1..=14 {
            assert_eq!(total_price(rate, days), rate * Decimal::from(days));
        }
    }

    #[test]
    fn test_total_price_non_positive_for_reversed_dates() {
        let days = rental_days(date(2024, 6, 4), date(2024, 6, 1));
        let total = total_price(Decimal::new(100, 0), days);
        assert!(total <= Decimal::ZERO);
    }
}
