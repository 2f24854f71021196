pub mod bills;

use axum::{routing::get, Router};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::bill::health_check;
use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "Sri Dongardevi Krishi Kendra Backend is running!";

/// Router with every bill route plus `/` and `/health`, without CORS.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { LIVENESS_MESSAGE }))
        .route("/health", get(health_check))
        .merge(bills::routes())
}

/// Only origins in the allow-list get CORS headers back.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Full application: routes, state, CORS and request tracing.
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    create_router()
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
