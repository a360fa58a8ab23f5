//! On-disk page encoding and decoding.
//!
//! # Responsibility
//! - Render a page into the single text blob persisted per page.
//! - Recover body and creation stamp from a persisted blob.
//! - Provide the cheap stamp-only scan used by directory listings.
//!
//! # Invariants
//! - `encode_page` output always round-trips through `decode_page` for the
//!   body (modulo outer whitespace) and the stamp (to second resolution).
//! - Decoding never returns an error: a blob without the expected structure
//!   decodes to empty fields so that one damaged file cannot take down a
//!   caller that tolerates missing metadata.

pub mod blob;
pub mod timestamp;

pub use blob::{decode_page, encode_page, scan_stamp_line, strip_stamp_label, DecodedPage};
pub use timestamp::{display_stamp, format_stamp, parse_stamp};
