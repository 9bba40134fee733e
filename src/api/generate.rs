//! 内容生成端点

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::GenerateResponse;
use crate::state::AppState;

/// 生成请求 ID
fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// 内容生成处理器
///
/// 接收原始请求体，由服务层在检查凭据之后再解析
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<GenerateResponse>> {
    let span = info_span!("generate", request_id = %generate_request_id());
    let text = state
        .generation
        .generate_from_body(&body)
        .instrument(span)
        .await?;

    Ok(Json(GenerateResponse { text }))
}

/// 创建内容生成路由
pub fn generate_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/generate", post(generate_handler))
}

#[cfg(test)]
mod tests {
    use crate::api::create_api_routes;
    use crate::config::{AppConfig, RuntimeMode};
    use crate::llm::TextGenerator;
    use crate::services::StubGenerator;
    use crate::state::AppState;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(mode: RuntimeMode, generator: Option<Arc<dyn TextGenerator>>) -> Router {
        let config = AppConfig {
            api_key: generator.as_ref().map(|_| "test-key".to_string()),
            mode,
            ..AppConfig::default()
        };
        create_api_routes(Arc::new(AppState::with_generator(config, generator).unwrap()))
    }

    async fn post_generate(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post("/api/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn cats() -> Value {
        json!({
            "topic": "Cats",
            "context": "Pet care blog",
            "tone": "friendly",
            "audience": "new owners",
            "requirements": "under 200 words"
        })
    }

    #[tokio::test]
    async fn test_success_returns_text_only() {
        let stub = StubGenerator::ok("Cats are wonderful companions...");
        let (status, body) =
            post_generate(app(RuntimeMode::Production, Some(stub.clone())), cats().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "text": "Cats are wonderful companions..." }));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_model_text_is_success() {
        let stub = StubGenerator::ok("");
        let (status, body) =
            post_generate(app(RuntimeMode::Production, Some(stub)), cats().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "text": "" }));
    }

    #[tokio::test]
    async fn test_whitespace_only_field_passes_relay_check() {
        let stub = StubGenerator::ok("generated");
        let mut body = cats();
        body["topic"] = json!("   ");

        let (status, json) =
            post_generate(app(RuntimeMode::Production, Some(stub.clone())), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "text": "generated" }));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_credential_ignores_body() {
        for body in [cats().to_string(), "{}".to_string(), "garbage".to_string()] {
            let (status, json) = post_generate(app(RuntimeMode::Development, None), body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                json,
                json!({ "error": "Missing GOOGLE_GENERATIVE_AI_API_KEY environment variable." })
            );
        }
    }

    #[tokio::test]
    async fn test_each_missing_field_is_rejected() {
        for key in ["topic", "context", "tone", "audience", "requirements"] {
            let stub = StubGenerator::ok("unused");
            let mut body = cats();
            body.as_object_mut().unwrap().remove(key);

            let (status, json) =
                post_generate(app(RuntimeMode::Production, Some(stub.clone())), body.to_string()).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {}", key);
            assert_eq!(json, json!({ "error": "All fields are required" }));
            assert_eq!(stub.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_provider_failure_in_production_hides_details() {
        let stub = StubGenerator::failing("quota exceeded");
        let (status, json) =
            post_generate(app(RuntimeMode::Production, Some(stub)), cats().to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Failed to generate content. Please try again." }));
    }

    #[tokio::test]
    async fn test_provider_failure_in_development_includes_details() {
        let stub = StubGenerator::failing("quota exceeded");
        let (status, json) =
            post_generate(app(RuntimeMode::Development, Some(stub)), cats().to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to generate content. Please try again.");
        assert_eq!(json["details"], "API error (503): quota exceeded");
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let response = app(RuntimeMode::Production, None)
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({ "status": "ok", "generator_configured": false }));
    }
}
