//! Environment variable API key resolution.
//!
//! Read-only: keys are set via the shell or deployment environment, never
//! written by the application.

use secrecy::SecretString;

/// Look up an API key in the environment.
///
/// Returns `None` when the variable is unset, empty, or not valid Unicode
/// (a secret that cannot be represented as a string is unusable anyway).
pub fn resolve_api_key(var: &str) -> Option<SecretString> {
    match std::env::var(var) {
        Ok(val) if val.trim().is_empty() => None,
        Ok(val) => Some(SecretString::from(val)),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => None,
    }
}
