use axum::{
    routing::{get, post},
    Router,
    Json,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

mod api;
mod config;
mod relay;

use relay::RelayClient;

#[derive(Clone)]
pub struct AppState {
    pub relay: RelayClient,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load env vars
    dotenvy::dotenv().ok();

    let config = config::Config::from_env();

    let relay = match RelayClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build relay client: {}", e);
            std::process::exit(1);
        }
    };

    // CORS Layer
    let cors = CorsLayer::permissive();

    // Build application with routes
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/scan", post(api::scan::submit_scan))
        .with_state(AppState { relay })
        .layer(cors);

    // Run app
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn root() -> Json<Value> {
    Json(json!({
        "system": "scan-relay",
        "status": "operational",
        "backend": "scan service"
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
