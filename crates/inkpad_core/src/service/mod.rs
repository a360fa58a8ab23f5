//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Enforce input validation before anything reaches storage.
//! - Keep outer layers (HTTP, CLI) decoupled from file layout details.

pub mod index_service;
pub mod page_service;
