//! Request handlers for the Folio REST API.

pub mod blog;
pub mod chat;
pub mod dashboard;
pub mod profile;
pub mod status;
