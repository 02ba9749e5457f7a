// POST /api/compare handler

use std::convert::Infallible;
use std::time::Instant;

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;
use warp::http::StatusCode;

use crate::handlers::error::status_for;
use crate::llm::{AggregateError, AggregateResponse};
use crate::models::{CompareRequest, CompareResponse, ErrorResponse};
use crate::state::AppState;

pub async fn compare_handler(
    request: CompareRequest,
    state: AppState,
) -> Result<impl warp::Reply, Infallible> {
    let span = info_span!("compare", request_id = %Uuid::new_v4());

    async move {
        let started = Instant::now();
        info!(
            query_chars = request.query.len(),
            files = request.files.len(),
            "POST /api/compare"
        );

        let prompt = request.into_prompt();
        let result = state.aggregator.compare(&prompt, &state.credentials).await;
        let (status, body) = render_outcome(&result);

        info!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "POST /api/compare completed"
        );
        Ok::<_, Infallible>(warp::reply::with_status(warp::reply::json(&body), status))
    }
    .instrument(span)
    .await
}

/// Status code and JSON body for the outcome of a comparison
pub fn render_outcome(
    result: &Result<AggregateResponse, AggregateError>,
) -> (StatusCode, serde_json::Value) {
    let (status, body) = match result {
        Ok(response) => (StatusCode::OK, serde_json::to_value(CompareResponse::from(response))),
        Err(err) => {
            if err.is_credential_related() {
                warn!(error = %err, "Comparison failed on credentials");
            } else {
                warn!(error = %err, "Comparison failed");
            }
            (status_for(err), serde_json::to_value(ErrorResponse::new(err.to_string())))
        }
    };

    match body {
        Ok(body) => (status, body),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "message": format!("Failed to encode response: {}", e) }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{
        Aggregator, Credential, Credentials, ErrorKind, LlmProvider, ProviderError, ProviderId,
        ProviderResult,
    };
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use warp::Reply;

    struct StubProvider {
        id: ProviderId,
        result: ProviderResult,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(id: ProviderId, result: ProviderResult) -> Arc<Self> {
            Arc::new(Self {
                id,
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        async fn send(&self, _prompt: &str, _credential: &Credential) -> ProviderResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn credentials() -> Credentials {
        Credentials::new()
            .with(ProviderId::OpenAi, Credential::new("sk-test"))
            .with(ProviderId::Anthropic, Credential::new("sk-ant-test"))
            .with(ProviderId::Gemini, Credential::new("gemini-test"))
    }

    fn request(json: serde_json::Value) -> CompareRequest {
        serde_json::from_value(json).unwrap()
    }

    async fn run(
        providers: Vec<Arc<StubProvider>>,
        credentials: Credentials,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let providers: Vec<Arc<dyn LlmProvider>> = providers
            .into_iter()
            .map(|p| p as Arc<dyn LlmProvider>)
            .collect();
        let aggregator = Aggregator::new(providers);
        let prompt = request(body).into_prompt();
        let result = aggregator.compare(&prompt, &credentials).await;
        render_outcome(&result)
    }

    #[tokio::test]
    async fn test_example_end_to_end() {
        let (status, body) = run(
            vec![
                StubProvider::new(ProviderId::OpenAi, Ok("4".to_string())),
                StubProvider::new(
                    ProviderId::Anthropic,
                    Err(ProviderError::new(ErrorKind::Unauthorized, "invalid x-api-key")),
                ),
                StubProvider::new(ProviderId::Gemini, Ok("Four".to_string())),
            ],
            credentials(),
            json!({"query": "2+2?"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"openai": "4", "claude": null, "gemini": "Four"}));
    }

    #[tokio::test]
    async fn test_all_failed_is_bad_gateway_without_text() {
        let (status, body) = run(
            vec![
                StubProvider::new(
                    ProviderId::OpenAi,
                    Err(ProviderError::new(ErrorKind::RateLimited, "slow down")),
                ),
                StubProvider::new(ProviderId::Anthropic, Err(ProviderError::timeout("late"))),
                StubProvider::new(
                    ProviderId::Gemini,
                    Err(ProviderError::new(ErrorKind::UpstreamUnavailable, "down")),
                ),
            ],
            credentials(),
            json!({"query": "2+2?"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object["message"]
            .as_str()
            .unwrap()
            .starts_with("All providers unavailable"));
    }

    #[tokio::test]
    async fn test_blank_query_is_bad_request_without_calls() {
        let openai = StubProvider::new(ProviderId::OpenAi, Ok("4".to_string()));
        let (status, body) = run(
            vec![openai.clone()],
            credentials(),
            json!({"query": "   "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Query is required"}));
        assert_eq!(openai.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_credentials_is_unauthorized() {
        let (status, body) = run(
            vec![StubProvider::new(ProviderId::OpenAi, Ok("4".to_string()))],
            Credentials::new(),
            json!({"query": "2+2?"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["message"].as_str().unwrap().contains("API key"));
    }

    #[tokio::test]
    async fn test_handler_reply_status() {
        let gemini: Arc<dyn LlmProvider> =
            StubProvider::new(ProviderId::Gemini, Ok("Four".to_string()));
        let aggregator = Aggregator::new(vec![gemini]);
        let state = AppState::new(aggregator, credentials());

        let reply = compare_handler(request(json!({"query": "2+2?"})), state)
            .await
            .unwrap();
        assert_eq!(reply.into_response().status(), StatusCode::OK);
    }
}
