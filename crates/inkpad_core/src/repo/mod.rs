//! Repository layer over the page directory.
//!
//! # Responsibility
//! - Define use-case oriented persistence contracts for pages.
//! - Keep file layout and codec details out of service orchestration.
//!
//! # Invariants
//! - Write paths validate page input before touching the filesystem.
//! - Storage keys are re-checked for path safety at this boundary even
//!   though services validate titles first.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   filesystem transport errors.

pub mod index_repo;
pub mod page_repo;
