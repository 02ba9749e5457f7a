// Mapping of failures to HTTP responses

use std::convert::Infallible;

use tracing::{info, warn};
use warp::http::StatusCode;
use warp::Rejection;

use crate::llm::AggregateError;
use crate::models::ErrorResponse;

/// HTTP status for a request-level comparison failure
pub fn status_for(err: &AggregateError) -> StatusCode {
    match err {
        AggregateError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AggregateError::MissingCredential => StatusCode::UNAUTHORIZED,
        AggregateError::AllProvidersFailed { .. } => StatusCode::BAD_GATEWAY,
    }
}

/// A JSON `{ message }` reply with the given status
pub fn error_reply(
    status: StatusCode,
    message: impl Into<String>,
) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&ErrorResponse::new(message)), status)
}

/// Turn warp rejections into JSON error bodies
pub async fn handle_rejection(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_string())
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            "A Content-Length header is required".to_string(),
        )
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Expected a JSON request body".to_string(),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        warn!(rejection = ?err, "Unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };

    info!(status = status.as_u16(), reason = %message, "Request rejected");
    Ok(error_reply(status, message))
}
