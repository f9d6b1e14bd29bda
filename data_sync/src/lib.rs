pub mod state;
pub mod v1;

use crate::state::AppState;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Full application: health check, the data sync gateway and the CORS/trace layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(v1::health).fallback(v1::method_not_allowed),
        )
        .merge(v1::router(state))
        .layer(v1::cors_layer())
        .layer(TraceLayer::new_for_http())
}
