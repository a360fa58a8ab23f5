//! Core persistence logic for Inkpad, a single-user note-taking service.
//! Pages live as one text file each in a flat directory; this crate owns
//! the file format, the store operations and the listing order.

pub mod codec;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use codec::{
    decode_page, display_stamp, encode_page, format_stamp, parse_stamp, scan_stamp_line,
    strip_stamp_label, DecodedPage,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::page::{
    display_title, storage_key, validate_title, Page, PageValidationError, TITLE_MAX_CHARS,
};
pub use repo::index_repo::{FilePageIndex, IndexEntry, PageIndex};
pub use repo::page_repo::{
    FilePageRepository, PageRecord, PageRepository, RepoError, RepoResult,
};
pub use service::index_service::{IndexService, PageListItem};
pub use service::page_service::{PageService, PageServiceError};
pub use store::{open_store, PageDir, StoreError, StoreResult, PAGE_FILE_EXT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
