//! HTTP boundary for the Inkpad page store.
//!
//! Thin JSON glue over `inkpad_core`: every route maps one-to-one onto a
//! core service call, and no parsing or ordering logic lives here.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use server::InkpadServer;
