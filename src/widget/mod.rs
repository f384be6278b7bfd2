//! Widget de booking embebible
//!
//! Núcleo headless del widget white-label: máquina de estados de vista,
//! cliente HTTP contra la API y renderizado de cada vista a HTML. El
//! glue de DOM/eventos lo pone la aplicación que lo embebe.

pub mod api_client;
pub mod controller;
pub mod render;
pub mod view_state;

pub use api_client::{BookingApi, HttpBookingApi, WidgetError};
pub use controller::BookingWidget;
pub use view_state::{GuestDetails, StaySearchParams, WidgetView};
