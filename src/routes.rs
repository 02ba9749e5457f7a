// Route definitions and handlers

use std::convert::Infallible;

use crate::handlers;
use crate::state::AppState;
use warp::Filter;

/// Largest accepted request body; uploaded file contents travel inline
pub const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    let api = warp::path("api");

    // POST /api/compare
    let compare = api
        .and(warp::path("compare"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(handlers::compare_handler);

    // GET /api/health
    let health = api
        .and(warp::path("health"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state))
        .and_then(handlers::health_handler);

    // Combine routes
    compare.or(health).recover(handlers::handle_rejection)
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
