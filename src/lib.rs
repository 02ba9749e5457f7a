// HTTP Server modules
pub mod config;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

// LLM provider adapters and the fan-out aggregator
pub mod llm;
