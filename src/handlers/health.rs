// GET /api/health handler

use std::convert::Infallible;

use tracing::debug;
use warp::http::StatusCode;

use crate::llm::ProviderId;
use crate::models::{HealthResponse, ProviderStatus};
use crate::state::AppState;

pub async fn health_handler(state: AppState) -> Result<impl warp::Reply, Infallible> {
    debug!("GET /api/health");

    let response = health_report(&state);

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}

/// Which providers can currently be dispatched; never includes key material
pub fn health_report(state: &AppState) -> HealthResponse {
    HealthResponse {
        status: "ok".to_string(),
        providers: ProviderStatus {
            openai: state.is_configured(ProviderId::OpenAi),
            claude: state.is_configured(ProviderId::Anthropic),
            gemini: state.is_configured(ProviderId::Gemini),
        },
    }
}
