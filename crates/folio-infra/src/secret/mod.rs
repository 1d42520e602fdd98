//! API key resolution.
//!
//! Keys come from environment variables only; there is no vault or keychain
//! backend in this deployment.

pub mod env;

pub use env::resolve_api_key;
