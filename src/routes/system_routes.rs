use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Liveness and version endpoints, nested under /system.
pub fn routes(server_version: String) -> Router {
    Router::new()
        .route("/alive", get(is_alive))
        .route("/version", get(version))
        .with_state(server_version)
}

/// GET /system/alive
async fn is_alive() -> &'static str {
    "OK"
}

/// GET /system/version
async fn version(State(server_version): State<String>) -> Json<serde_json::Value> {
    Json(json!({
        "version": server_version
    }))
}
