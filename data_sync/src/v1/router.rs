use crate::state::AppState;
use crate::v1::handlers::data_sync::{get_data, method_not_allowed};
use axum::Router;
use axum::http::{Method, header};
use axum::routing::get;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

/// The gateway answers on every path; only the method and `type` matter.
pub fn router(state: AppState) -> Router {
    let gateway = get(get_data)
        .head(method_not_allowed)
        .fallback(method_not_allowed);

    Router::<AppState>::new()
        .route("/", gateway.clone())
        .route("/{*path}", gateway)
        .with_state(state)
}

/// Every OPTIONS request is answered here with `200` and an empty body, so it
/// never reaches a handler or the database.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}
