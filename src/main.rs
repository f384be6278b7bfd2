use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use rental_booking::config::environment::EnvironmentConfig;
use rental_booking::database;
use rental_booking::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use rental_booking::routes;
use rental_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚐 Rental Booking API - Sistema white-label");
    info!("===========================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos (ciclo de vida explícito: se abre acá,
    // se cierra tras el shutdown graceful)
    let pool = match database::create_pool(&config.database_url).await {
        Ok(pool) => {
            info!("✅ Base de datos conectada: {}", database::mask_database_url(&config.database_url));
            pool
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // CORS: permisivo salvo que haya orígenes configurados
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let app_state = AppState::new(pool.clone(), config.clone());

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/bookings", routes::booking_routes::create_booking_router())
        .nest("/api/clients", routes::client_routes::create_client_router())
        .nest("/api/depots", routes::depot_routes::create_depot_router())
        .nest("/api/quotes", routes::quote_routes::create_quote_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Probe de conectividad a storage");
    info!("   GET  /api/vehicles/search - Búsqueda con filtros");
    info!("   GET  /api/vehicles/:id - Detalle de vehículo");
    info!("   POST /api/bookings - Crear reserva");
    info!("   GET  /api/bookings/:id - Detalle de reserva");
    info!("   GET  /api/clients/:client_id/config - Tema white-label");
    info!("   GET  /api/depots - Listado de depots");
    info!("   GET  /api/depots/city/:city - Depots por ciudad");
    info!("   POST /api/quotes - Registrar quote de búsqueda");
    info!("   GET  /api/quotes - Quotes recientes (analítica)");
    info!("   GET  /api/quotes/client/:client_id - Quotes por client");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Cierre explícito del pool al apagar
    pool.close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Banner raíz con el listado de endpoints
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Rental Booking API",
        "endpoints": [
            "GET /health",
            "GET /api/vehicles/search",
            "GET /api/vehicles/:id",
            "POST /api/bookings",
            "GET /api/bookings/:id",
            "GET /api/clients/:client_id/config",
            "GET /api/depots",
            "GET /api/depots/city/:city",
            "POST /api/quotes",
            "GET /api/quotes",
            "GET /api/quotes/client/:client_id"
        ]
    }))
}

/// Probe de conectividad a la base de datos
async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match database::ping(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "success": true, "status": "healthy", "database": "connected" })),
        ),
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "status": "unhealthy", "database": "disconnected" })),
            )
        }
    }
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
