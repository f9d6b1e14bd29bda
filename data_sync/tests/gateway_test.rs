mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{body_bytes, body_json, send, test_app, unreachable_db};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn options_returns_empty_body_with_cors_headers() {
    for uri in ["/", "/?type=buildings", "/?type=foo"] {
        let response = send(test_app(unreachable_db()), "OPTIONS", uri).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_owned();
        for method in ["GET", "POST", "OPTIONS"] {
            assert!(methods.contains(method), "{methods}");
        }
        assert!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
                .to_str()
                .unwrap()
                .eq_ignore_ascii_case("content-type")
        );
        assert!(headers.get(header::CONTENT_TYPE).is_none());
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn browser_preflight_is_answered_without_touching_the_db() {
    let response = test_app(unreachable_db())
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/?type=all")
                .header(header::ORIGIN, "https://dispatch.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[header::ACCESS_CONTROL_MAX_AGE], "86400");
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    for method in ["POST", "PUT", "PATCH", "DELETE"] {
        let response = send(test_app(unreachable_db()), method, "/?type=all").await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Method not allowed" })
        );
    }
}

#[tokio::test]
async fn head_is_not_treated_as_get() {
    let response = send(test_app(unreachable_db()), "HEAD", "/").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unreachable_db_returns_error_without_data_keys() {
    for uri in [
        "/",
        "/?type=all",
        "/?type=buildings",
        "/?type=water_sources",
        "/?type=calls",
    ] {
        let response = send(test_app(unreachable_db()), "GET", uri).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = body_json(response).await;
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1, "{body}");
        assert!(!object["error"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn unrecognized_type_still_opens_a_connection() {
    let response = send(test_app(unreachable_db()), "GET", "/?type=foo").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn repeated_type_parameter_is_not_a_client_error() {
    let response = send(
        test_app(unreachable_db()),
        "GET",
        "/?type=buildings&type=calls",
    )
    .await;

    // resolved to a single category, so the request reaches the db
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn gateway_answers_on_any_path() {
    for uri in ["/v1?type=all", "/data-sync", "/functions/data-sync?type=calls"] {
        let response = send(test_app(unreachable_db()), "GET", uri).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert!(body_json(response).await["error"].is_string());

        let response = send(test_app(unreachable_db()), "POST", uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Method not allowed" })
        );

        let response = send(test_app(unreachable_db()), "OPTIONS", uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn health_does_not_need_the_db() {
    let response = send(test_app(unreachable_db()), "GET", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_rejects_other_methods_with_json() {
    let response = send(test_app(unreachable_db()), "POST", "/health").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Method not allowed" })
    );
}
