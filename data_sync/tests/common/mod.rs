#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use data_sync::state::{AppState, Db};
use serde_json::Value;
use sqlx::postgres::PgConnectOptions;
use tower::ServiceExt;

/// Connect options for a port nothing listens on.
pub fn unreachable_db() -> PgConnectOptions {
    PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("dispatch")
        .password("dispatch")
        .database("fire")
}

pub fn test_app(connect_options: PgConnectOptions) -> Router {
    data_sync::app(AppState {
        db: Db::new(connect_options),
    })
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
