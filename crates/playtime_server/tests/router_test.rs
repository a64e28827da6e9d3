//! HTTP surface tests using `oneshot` against the router.

mod test_utils;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use playtime_core::ResponseMode;
use playtime_error::TransportErrorKind;
use playtime_server::{ApiState, LOOKUP_PATH, LookupService, ServerConfig, create_router};
use std::sync::Arc;
use test_utils::{MockBehavior, MockCompletionDriver};
use tower::ServiceExt;

fn server_config(origin: &str) -> ServerConfig {
    ServerConfig {
        bind: "127.0.0.1:0".to_string(),
        allowed_origin: origin.to_string(),
    }
}

fn router(driver: Arc<MockCompletionDriver>) -> anyhow::Result<Router> {
    let service = LookupService::new(driver, ResponseMode::PlainText);
    Ok(create_router(ApiState::new(service), &server_config("*"))?)
}

async fn body_text(response: axum::response::Response) -> anyhow::Result<String> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn test_get_success_returns_time_json() -> anyhow::Result<()> {
    let driver = Arc::new(MockCompletionDriver::new_success("70-75h (approx.)"));
    let response = router(driver.clone())?
        .oneshot(
            Request::get(format!("{}?gameTitle=Elden%20Ring", LOOKUP_PATH)).body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await?)?;
    assert_eq!(body, serde_json::json!({"time": "73h (approx.)"}));
    assert!(driver.last_call().unwrap().0.contains("\"Elden Ring\""));
    Ok(())
}

#[tokio::test]
async fn test_post_json_body() -> anyhow::Result<()> {
    let driver = Arc::new(MockCompletionDriver::new_success("30h 15m"));
    let response = router(driver)?
        .oneshot(
            Request::post(LOOKUP_PATH)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"gameTitle": "Hades"}"#))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await?, r#"{"time":"30h 15m"}"#);
    Ok(())
}

#[tokio::test]
async fn test_unavailable_is_200() -> anyhow::Result<()> {
    let driver = Arc::new(MockCompletionDriver::new(MockBehavior::Empty));
    let response = router(driver)?
        .oneshot(Request::get(format!("{}?gameTitle=Hades", LOOKUP_PATH)).body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await?, r#"{"time":"N/A (API issue)"}"#);
    Ok(())
}

#[tokio::test]
async fn test_missing_title_is_400() -> anyhow::Result<()> {
    let driver = Arc::new(MockCompletionDriver::new_success("30h"));

    let requests = [
        Request::get(LOOKUP_PATH).body(Body::empty())?,
        Request::get(format!("{}?gameTitle=%20%20", LOOKUP_PATH)).body(Body::empty())?,
        Request::post(LOOKUP_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))?,
        Request::post(LOOKUP_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{broken"))?,
    ];

    for request in requests {
        let response = router(driver.clone())?.oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await?, "Missing gameTitle parameter.");
    }
    assert_eq!(driver.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_500() -> anyhow::Result<()> {
    let driver = Arc::new(MockCompletionDriver::new(MockBehavior::TransportFailure(
        TransportErrorKind::HttpStatus {
            status_code: 503,
            message: "overloaded".to_string(),
        },
    )));
    let response = router(driver)?
        .oneshot(Request::get(format!("{}?gameTitle=Hades", LOOKUP_PATH)).body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await?, "Error fetching time from API.");
    Ok(())
}

#[tokio::test]
async fn test_missing_key_is_500() -> anyhow::Result<()> {
    let driver = Arc::new(MockCompletionDriver::new(MockBehavior::MissingKey));
    let response = router(driver)?
        .oneshot(Request::get(format!("{}?gameTitle=Hades", LOOKUP_PATH)).body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(response).await?,
        "Server configuration error: API key missing."
    );
    Ok(())
}

#[tokio::test]
async fn test_options_is_200_with_empty_body() -> anyhow::Result<()> {
    let driver = Arc::new(MockCompletionDriver::new_success("30h"));
    let response = router(driver.clone())?
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(LOOKUP_PATH)
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS].to_str()?.to_string();
    assert!(methods.contains("POST"));
    assert!(body_text(response).await?.is_empty());
    assert_eq!(driver.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_configured_origin() -> anyhow::Result<()> {
    let driver = Arc::new(MockCompletionDriver::new_success("30h"));
    let service = LookupService::new(driver, ResponseMode::PlainText);
    let router = create_router(
        ApiState::new(service),
        &server_config("https://games.example.com"),
    )?;

    let response = router
        .oneshot(Request::get("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://games.example.com"
    );
    assert_eq!(body_text(response).await?, r#"{"status":"ok"}"#);
    Ok(())
}

#[test]
fn test_invalid_origin_is_rejected() {
    let driver = Arc::new(MockCompletionDriver::new_success("30h"));
    let service = LookupService::new(driver, ResponseMode::PlainText);
    assert!(create_router(ApiState::new(service), &server_config("bad\norigin")).is_err());
}
