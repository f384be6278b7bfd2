use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::client::Client;

// Tema white-label que el widget aplica como CSS custom properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub secondary_color: String,
}

// Configuración pública de un client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub id: Uuid,
    pub name: String,
    pub theme: ThemeConfig,
}

impl From<Client> for ClientConfig {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            theme: ThemeConfig {
                primary_color: client.theme_primary_color,
                secondary_color: client.theme_secondary_color,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientConfigResponse {
    pub success: bool,
    pub config: ClientConfig,
}
