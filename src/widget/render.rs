//! Renderizado HTML del widget
//!
//! Cada vista se renderiza a un string HTML autocontenido. El tema del
//! client se aplica como CSS custom properties; sin config cargada se
//! usan los colores default.

use uuid::Uuid;

use crate::dto::client_dto::ThemeConfig;
use crate::dto::vehicle_dto::VehicleSearchResult;
use crate::widget::view_state::StaySearchParams;

const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";
const DEFAULT_SECONDARY_COLOR: &str = "#1e40af";

/// Pantalla mostrada mientras corre el probe inicial
pub fn loading() -> String {
    r#"<div class="booking-widget-loading">⏳ Loading booking system...</div>"#.to_string()
}

/// Pantalla terminal cuando el probe agota sus intentos
pub fn connection_failed() -> String {
    r#"<div class="booking-widget-error">❌ Unable to connect to booking system. Please try again later.</div>"#
        .to_string()
}

/// Envolver una vista con el contenedor y el bloque de estilos temados
fn shell(theme: Option<&ThemeConfig>, inner: &str) -> String {
    let (primary, secondary) = match theme {
        Some(theme) => (theme.primary_color.as_str(), theme.secondary_color.as_str()),
        None => (DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR),
    };

    format!(
        r#"<div class="booking-widget">
<style>
  .booking-widget {{
    --primary-color: {primary};
    --secondary-color: {secondary};
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  }}
  .booking-widget button.primary {{
    background-color: var(--primary-color);
    color: white;
    border: none;
    padding: 12px 24px;
    border-radius: 6px;
    cursor: pointer;
  }}
  .booking-widget button.secondary {{
    background-color: white;
    color: var(--primary-color);
    border: 2px solid var(--primary-color);
    padding: 12px 24px;
    border-radius: 6px;
    cursor: pointer;
  }}
  .booking-widget input, .booking-widget select {{
    padding: 10px;
    border: 1px solid #ddd;
    border-radius: 6px;
    width: 100%;
    box-sizing: border-box;
  }}
  .booking-widget .form-group {{ margin-bottom: 16px; }}
  .booking-widget .vehicle-card {{
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    padding: 16px;
    margin-bottom: 16px;
    display: flex;
    gap: 16px;
  }}
  .booking-widget .vehicle-price {{
    font-size: 24px;
    font-weight: bold;
    color: var(--primary-color);
  }}
  .booking-widget .feature-badge {{
    background: #f3f4f6;
    padding: 4px 12px;
    border-radius: 12px;
    font-size: 12px;
    color: #6b7280;
  }}
  .booking-widget .booking-summary {{
    background: #f9fafb;
    padding: 20px;
    border-radius: 8px;
    margin-bottom: 20px;
  }}
  .booking-widget .summary-row {{
    display: flex;
    justify-content: space-between;
    margin-bottom: 10px;
  }}
</style>
{inner}
</div>"#
    )
}

/// Vista inicial: formulario de búsqueda
pub fn search_form(theme: Option<&ThemeConfig>) -> String {
    let inner = r#"<h2>Search Campervans</h2>
<form id="search-form">
  <div class="form-group">
    <label for="pickup-date">Pick Up Date</label>
    <input type="date" id="pickup-date" required />
  </div>
  <div class="form-group">
    <label for="dropoff-date">Drop Off Date</label>
    <input type="date" id="dropoff-date" required />
  </div>
  <div class="form-group">
    <label for="people">Number of People</label>
    <input type="number" id="people" min="1" max="10" value="2" required />
  </div>
  <div class="form-group">
    <label for="transmission">Transmission</label>
    <select id="transmission">
      <option value="">Any</option>
      <option value="automatic">Automatic</option>
      <option value="manual">Manual</option>
    </select>
  </div>
  <div class="form-group">
    <label for="vehicle-type">Vehicle Type</label>
    <select id="vehicle-type">
      <option value="">Any</option>
      <option value="campervan">Campervan</option>
      <option value="motorhome">Motorhome</option>
    </select>
  </div>
  <button type="submit" class="primary">Search Vehicles</button>
</form>"#;

    shell(theme, inner)
}

fn vehicle_card(result: &VehicleSearchResult) -> String {
    let vehicle = &result.vehicle;

    let mut badges = vec![
        format!(r#"<span class="feature-badge">{}</span>"#, vehicle.transmission),
        format!(r#"<span class="feature-badge">Sleeps {}</span>"#, vehicle.sleeps),
    ];
    if vehicle.has_toilet {
        badges.push(r#"<span class="feature-badge">Toilet</span>"#.to_string());
    }
    if vehicle.has_shower {
        badges.push(r#"<span class="feature-badge">Shower</span>"#.to_string());
    }
    badges.push(format!(r#"<span class="feature-badge">{}</span>"#, vehicle.vehicle_type));

    format!(
        r#"<div class="vehicle-card">
  <div class="vehicle-info">
    <h3>{name}</h3>
    <p>{operator}</p>
    <div class="vehicle-features">{badges}</div>
    <p>${rate}/day × {days} days</p>
  </div>
  <div>
    <div class="vehicle-price">${total}</div>
    <button class="primary book-btn" data-vehicle-id="{id}">Book Now</button>
  </div>
</div>"#,
        name = vehicle.name,
        operator = vehicle.operator_name,
        badges = badges.join(""),
        rate = vehicle.price_per_day,
        days = result.days,
        total = result.total_price,
        id = vehicle.id,
    )
}

/// Vista de resultados: tarjetas ordenadas por precio
pub fn results(
    theme: Option<&ThemeConfig>,
    _params: &StaySearchParams,
    vehicles: &[VehicleSearchResult],
) -> String {
    let cards: String = vehicles.iter().map(vehicle_card).collect();

    let inner = format!(
        r#"<h2>Available Vehicles ({count})</h2>
<button id="back-to-search" class="primary">New Search</button>
<div id="vehicles-list">{cards}</div>"#,
        count = vehicles.len(),
    );

    shell(theme, &inner)
}

/// Vista de reserva: resumen de la estadía + datos del huésped
pub fn booking_form(
    theme: Option<&ThemeConfig>,
    params: &StaySearchParams,
    selected: &VehicleSearchResult,
) -> String {
    let inner = format!(
        r#"<h2>Complete Your Booking</h2>
<div class="booking-summary">
  <h3>{name}</h3>
  <p>{operator}</p>
  <div class="summary-row"><span>Pick Up Date:</span><strong>{pickup}</strong></div>
  <div class="summary-row"><span>Drop Off Date:</span><strong>{dropoff}</strong></div>
  <div class="summary-row"><span>Number of People:</span><strong>{people}</strong></div>
  <div class="summary-row"><span>Daily Rate:</span><strong>${rate}</strong></div>
  <div class="summary-row"><span>Number of Days:</span><strong>{days}</strong></div>
  <div class="summary-row total-price"><span>Total Price:</span><strong>${total}</strong></div>
</div>
<form id="booking-form">
  <div class="form-group">
    <label for="guest-name">Full Name *</label>
    <input type="text" id="guest-name" required />
  </div>
  <div class="form-group">
    <label for="guest-email">Email Address *</label>
    <input type="email" id="guest-email" required />
  </div>
  <div class="form-group">
    <label for="guest-phone">Phone Number</label>
    <input type="tel" id="guest-phone" />
  </div>
  <button type="button" id="back-to-results" class="secondary">Back to Results</button>
  <button type="submit" class="primary">Confirm Booking</button>
</form>"#,
        name = selected.vehicle.name,
        operator = selected.vehicle.operator_name,
        pickup = params.pickup_date,
        dropoff = params.dropoff_date,
        people = params.number_of_people,
        rate = selected.vehicle.price_per_day,
        days = selected.days,
        total = selected.total_price,
    );

    shell(theme, &inner)
}

/// Vista terminal de confirmación
pub fn confirmation(theme: Option<&ThemeConfig>, booking_id: Uuid, guest_email: &str) -> String {
    let inner = format!(
        r#"<div class="booking-confirmed">
  <h3>Booking Confirmed! ✓</h3>
  <p>Your booking has been confirmed. Booking ID: <strong>{booking_id}</strong></p>
  <p>A confirmation email will be sent to <strong>{guest_email}</strong></p>
</div>"#,
    );

    shell(theme, &inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{Transmission, VehicleType};
    use crate::repositories::vehicle_repository::VehicleWithOperator;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn theme() -> ThemeConfig {
        ThemeConfig {
            primary_color: "#ff6b35".to_string(),
            secondary_color: "#004e89".to_string(),
        }
    }

    fn params() -> StaySearchParams {
        StaySearchParams {
            pickup_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            dropoff_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            number_of_people: 2,
        }
    }

    fn result() -> VehicleSearchResult {
        VehicleSearchResult {
            vehicle: VehicleWithOperator {
                id: Uuid::new_v4(),
                operator_id: Uuid::new_v4(),
                name: "Beach Hopper".to_string(),
                vehicle_type: VehicleType::Campervan,
                transmission: Transmission::Manual,
                sleeps: 2,
                has_toilet: true,
                has_shower: false,
                has_kitchen: true,
                price_per_day: Decimal::new(100, 0),
                image_url: None,
                created_at: Utc::now(),
                operator_name: "Coastal Campers".to_string(),
                operator_code: "CC".to_string(),
            },
            total_price: Decimal::new(300, 0),
            days: 3,
        }
    }

    #[test]
    fn test_search_form_has_all_fields() {
        let html = search_form(None);
        assert!(html.contains("Search Campervans"));
        assert!(html.contains("pickup-date"));
        assert!(html.contains("dropoff-date"));
        assert!(html.contains("transmission"));
        assert!(html.contains("vehicle-type"));
    }

    #[test]
    fn test_theme_colors_are_applied() {
        let html = search_form(Some(&theme()));
        assert!(html.contains("--primary-color: #ff6b35"));
        assert!(html.contains("--secondary-color: #004e89"));
    }

    #[test]
    fn test_default_colors_without_config() {
        let html = search_form(None);
        assert!(html.contains(DEFAULT_PRIMARY_COLOR));
    }

    #[test]
    fn test_results_renders_cards_and_count() {
        let html = results(None, &params(), &[result()]);
        assert!(html.contains("Available Vehicles (1)"));
        assert!(html.contains("Beach Hopper"));
        assert!(html.contains("Coastal Campers"));
        assert!(html.contains("$100/day × 3 days"));
        assert!(html.contains("$300"));
        assert!(html.contains("Toilet"));
        assert!(!html.contains(">Shower<"));
    }

    #[test]
    fn test_booking_form_shows_summary() {
        let html = booking_form(None, &params(), &result());
        assert!(html.contains("Complete Your Booking"));
        assert!(html.contains("2024-06-01"));
        assert!(html.contains("2024-06-04"));
        assert!(html.contains("$300"));
        assert!(html.contains("guest-email"));
    }

    #[test]
    fn test_loading_and_failure_screens() {
        assert!(loading().contains("Loading booking system"));
        assert!(connection_failed().contains("Unable to connect"));
    }

    #[test]
    fn test_confirmation_shows_booking_reference() {
        let booking_id = Uuid::new_v4();
        let html = confirmation(None, booking_id, "jane@example.com");
        assert!(html.contains("Booking Confirmed!"));
        assert!(html.contains(&booking_id.to_string()));
        assert!(html.contains("jane@example.com"));
    }
}
