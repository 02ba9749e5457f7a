//! Provider credentials
//!
//! API keys are supplied by configuration and handed to adapters per request.

pub mod credential;

pub use credential::{Credential, CredentialError, Credentials};
