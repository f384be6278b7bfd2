use serde::{Deserialize, Serialize};

use crate::repositories::depot_repository::DepotWithOperator;

// Response de listados de depots
#[derive(Debug, Serialize, Deserialize)]
pub struct DepotsResponse {
    pub success: bool,
    pub count: usize,
    pub depots: Vec<DepotWithOperator>,
}
