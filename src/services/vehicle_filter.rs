//! Filtro de vehículos
//!
//! Lista de predicados componibles evaluada en memoria sobre el conjunto
//! candidato. Un predicado ausente no impone restricción; los presentes
//! se combinan en conjunción (AND). La semántica de filtrado vive entera
//! en este módulo en lugar de repartirse en armado condicional de SQL.

use rust_decimal::Decimal;

use crate::models::vehicle::{Transmission, VehicleType};
use crate::repositories::vehicle_repository::VehicleWithOperator;

/// Predicados opcionales de la búsqueda
#[derive(Debug, Clone, Default)]
pub struct VehicleFilters {
    pub transmission: Option<Transmission>,
    pub min_sleeps: Option<i32>,
    /// Solo restringe cuando el flag viene explícitamente en true
    pub has_toilet: Option<bool>,
    pub has_shower: Option<bool>,
    pub vehicle_type: Option<VehicleType>,
    pub max_price: Option<Decimal>,
}

impl VehicleFilters {
    /// Evaluar la conjunción de todos los predicados presentes
    pub fn matches(&self, vehicle: &VehicleWithOperator) -> bool {
        if let Some(transmission) = self.transmission {
            if vehicle.transmission != transmission {
                return false;
            }
        }

        if let Some(min_sleeps) = self.min_sleeps {
            if vehicle.sleeps < min_sleeps {
                return false;
            }
        }

        if self.has_toilet == Some(true) && !vehicle.has_toilet {
            return false;
        }

        if self.has_shower == Some(true) && !vehicle.has_shower {
            return false;
        }

        if let Some(vehicle_type) = self.vehicle_type {
            if vehicle.vehicle_type != vehicle_type {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if vehicle.price_per_day > max_price {
                return false;
            }
        }

        true
    }
}

/// Aplicar los filtros y ordenar ascendente por tarifa diaria.
/// El sort es estable: los empates conservan el orden de entrada.
pub fn apply(filters: &VehicleFilters, candidates: Vec<VehicleWithOperator>) -> Vec<VehicleWithOperator> {
    let mut matched: Vec<VehicleWithOperator> = candidates
        .into_iter()
        .filter(|v| filters.matches(v))
        .collect();

    matched.sort_by(|a, b| a.price_per_day.cmp(&b.price_per_day));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn vehicle(
        name: &str,
        vehicle_type: VehicleType,
        transmission: Transmission,
        sleeps: i32,
        has_toilet: bool,
        has_shower: bool,
        price_per_day: i64,
    ) -> VehicleWithOperator {
        VehicleWithOperator {
            id: Uuid::new_v4(),
            operator_id: Uuid::new_v4(),
            name: name.to_string(),
            vehicle_type,
            transmission,
            sleeps,
            has_toilet,
            has_shower,
            has_kitchen: true,
            price_per_day: Decimal::new(price_per_day, 0),
            image_url: None,
            created_at: Utc::now(),
            operator_name: "Coastal Campers".to_string(),
            operator_code: "CC".to_string(),
        }
    }

    fn fleet() -> Vec<VehicleWithOperator> {
        vec![
            vehicle("Beach Hopper", VehicleType::Campervan, Transmission::Manual, 2, false, false, 95),
            vehicle("Family Cruiser", VehicleType::Motorhome, Transmission::Automatic, 6, true, true, 210),
            vehicle("Weekender", VehicleType::Campervan, Transmission::Automatic, 3, true, false, 120),
            vehicle("Road Palace", VehicleType::Motorhome, Transmission::Automatic, 5, true, true, 185),
            vehicle("Surf Van", VehicleType::Campervan, Transmission::Manual, 2, false, true, 80),
        ]
    }

    #[test]
    fn test_no_filters_returns_everything_sorted_by_price() {
        let result = apply(&VehicleFilters::default(), fleet());
        assert_eq!(result.len(), 5);
        for pair in result.windows(2) {
            assert!(pair[0].price_per_day <= pair[1].price_per_day);
        }
    }

    #[test]
    fn test_min_sleeps_and_toilet_scenario() {
        // Escenario: min_sleeps=4 + has_toilet=true sobre 5 candidatos,
        // exactamente 2 cumplen ambos, ascendente por precio
        let filters = VehicleFilters {
            min_sleeps: Some(4),
            has_toilet: Some(true),
            ..Default::default()
        };
        let result = apply(&filters, fleet());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Road Palace");
        assert_eq!(result[1].name, "Family Cruiser");
    }

    #[test]
    fn test_result_is_subset_satisfying_all_predicates() {
        let filters = VehicleFilters {
            transmission: Some(Transmission::Automatic),
            vehicle_type: Some(VehicleType::Motorhome),
            max_price: Some(Decimal::new(200, 0)),
            ..Default::default()
        };
        let candidates = fleet();
        let candidate_ids: Vec<Uuid> = candidates.iter().map(|v| v.id).collect();
        let result = apply(&filters, candidates);

        for v in &result {
            assert!(candidate_ids.contains(&v.id));
            assert_eq!(v.transmission, Transmission::Automatic);
            assert_eq!(v.vehicle_type, VehicleType::Motorhome);
            assert!(v.price_per_day <= Decimal::new(200, 0));
        }
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Road Palace");
    }

    #[test]
    fn test_relaxing_a_predicate_never_removes_matches() {
        let strict = VehicleFilters {
            min_sleeps: Some(4),
            has_toilet: Some(true),
            ..Default::default()
        };
        let relaxed = VehicleFilters {
            min_sleeps: Some(4),
            ..Default::default()
        };

        let strict_ids: Vec<Uuid> = apply(&strict, fleet()).iter().map(|v| v.id).collect();
        let strict_names: Vec<String> = apply(&strict, fleet()).iter().map(|v| v.name.clone()).collect();
        let relaxed_names: Vec<String> = apply(&relaxed, fleet()).iter().map(|v| v.name.clone()).collect();

        assert!(strict_ids.len() <= relaxed_names.len());
        for name in strict_names {
            assert!(relaxed_names.contains(&name));
        }
    }

    #[test]
    fn test_has_toilet_false_imposes_no_constraint() {
        // El flag solo restringe cuando viene explícitamente en true
        let filters = VehicleFilters {
            has_toilet: Some(false),
            ..Default::default()
        };
        assert_eq!(apply(&filters, fleet()).len(), 5);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let filters = VehicleFilters {
            max_price: Some(Decimal::new(10, 0)),
            ..Default::default()
        };
        assert!(apply(&filters, fleet()).is_empty());
    }

    #[test]
    fn test_price_ties_keep_input_order() {
        let mut candidates = fleet();
        let mut twin = vehicle("Surf Van Twin", VehicleType::Campervan, Transmission::Manual, 2, false, true, 80);
        twin.operator_name = "Outback Motors".to_string();
        candidates.push(twin);

        let result = apply(&VehicleFilters::default(), candidates);
        // Ambos a $80: "Surf Van" entró antes y debe salir antes
        assert_eq!(result[0].name, "Surf Van");
        assert_eq!(result[1].name, "Surf Van Twin");
    }
}
