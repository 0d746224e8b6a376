use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;
use crate::routes::{item_routes, system_routes};
use crate::state::items::ItemStore;

/// Build the complete Axum application:
/// - /list, /price, /create, /update, /delete (item operations)
/// - /system  (alive + version)
///
/// `store` is a shared handle; every request sees the same map.
pub fn build_app(store: ItemStore, cfg: &AppConfig) -> Router {
    Router::new()
        .merge(item_routes::routes(store))
        .nest("/system", system_routes::routes(cfg.server_version.clone()))
        // Logging middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
