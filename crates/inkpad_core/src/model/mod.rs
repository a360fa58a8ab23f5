//! Domain model for wiki pages.
//!
//! # Responsibility
//! - Define the canonical page shape shared by storage and services.
//! - Own title validation and the title <-> storage key mapping.
//!
//! # Invariants
//! - A page is identified by its display title; the storage key is always
//!   derived, never stored independently.
//! - Valid titles contain no path separators, so a storage key can never
//!   escape the page directory.

pub mod page;
