use std::process;

use ai_compare::config::AppConfig;
use ai_compare::logging::init_logging;
use ai_compare::routes::configure_routes;
use ai_compare::server::{available_addr, PORT_RETRIES};
use ai_compare::state::AppState;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            process::exit(1);
        }
    };

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to create provider clients");
            process::exit(1);
        }
    };

    if config.credentials.is_empty() {
        info!("No provider API keys configured; comparisons will be rejected until one is set");
    }

    let routes = configure_routes(state);
    let addr = match available_addr(config.socket_addr(), PORT_RETRIES).await {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, addr = %config.socket_addr(), "No port available");
            process::exit(1);
        }
    };

    info!(%addr, "Starting server");
    warp::serve(routes).run(addr).await;
}
