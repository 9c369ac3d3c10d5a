use crate::handler::{AppState, generate_mockup, method_not_allowed, preflight};
use crate::request_id::inject_request_id;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header},
    middleware,
    routing::{get, post},
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const MOCKUP_PATH: &str = "/api/mockup";

pub fn build_router(app_state: AppState) -> Router {
    let body_limit = app_state.config.max_body_bytes;

    Router::new()
        .route(
            MOCKUP_PATH,
            post(generate_mockup)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(inject_request_id))
        // Outermost, so rejections from inner layers carry them too
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gemini::{GeminiRequest, GeminiResponse};
    use crate::image_client::{ImageModel, ImageModelError};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct UnreachableModel;

    #[async_trait]
    impl ImageModel for UnreachableModel {
        async fn generate_content(
            &self,
            _api_key: &str,
            _model: &str,
            _request: &GeminiRequest,
        ) -> Result<GeminiResponse, ImageModelError> {
            panic!("model must not be called");
        }
    }

    fn router(max_body_bytes: usize) -> Router {
        build_router(AppState {
            config: Arc::new(Config {
                api_key: Some("k".to_string()),
                max_body_bytes,
                ..Config::default()
            }),
            image_model: Arc::new(UnreachableModel),
        })
    }

    #[tokio::test]
    async fn test_health_carries_cors_headers() {
        let resp = router(1024)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(resp.headers()["access-control-allow-methods"], "POST,OPTIONS");
        assert_eq!(resp.headers()["access-control-allow-headers"], "Content-Type");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected_with_cors_headers() {
        let oversized = format!(r#"{{"monogram":"{}"}}"#, "A".repeat(256));
        let resp = router(64)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(MOCKUP_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from(oversized))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let resp = router(1024)
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(MOCKUP_PATH)
                    .header("x-request-id", "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()["x-request-id"], "req-123");
    }

    #[tokio::test]
    async fn test_request_id_is_generated_when_absent() {
        let resp = router(1024)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = resp.headers()["x-request-id"].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
