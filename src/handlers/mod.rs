// Handlers module

pub mod compare;
pub mod error;
pub mod health;

pub use compare::compare_handler;
pub use error::handle_rejection;
pub use health::health_handler;
