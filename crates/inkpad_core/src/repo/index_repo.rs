//! Directory listing aggregation.
//!
//! # Responsibility
//! - Enumerate page files and project each into an index entry.
//! - Order entries newest-first using the stamp-only decode path.
//!
//! # Invariants
//! - Listing never fails because of one damaged file; only a directory
//!   read failure aborts.
//! - An entry whose stamp does not parse is kept, never provably newer
//!   than any other entry, and therefore settles toward the end.
//! - Two listings over unchanged files return identical sequences:
//!   enumeration is fixed to filename order before the stamp sort, and the
//!   stamp sort is stable.

use crate::codec::{parse_stamp, scan_stamp_line};
use crate::model::page::display_title;
use crate::repo::page_repo::{RepoError, RepoResult};
use crate::store::{PageDir, PAGE_FILE_EXT};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::cmp::Ordering;

/// Listing projection of one stored page.
///
/// Derived entirely from the filename and the stamp line; the body is
/// never read for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Display title recovered from the filename.
    pub title: String,
    /// Filename stem the page is stored under.
    pub storage_key: String,
    /// Raw stamp value text; empty when the file carries no stamp line.
    pub stamp_text: String,
    /// Parsed stamp, when `stamp_text` matches the fixed format.
    pub stamp: Option<DateTime<FixedOffset>>,
}

/// Repository interface for the page listing.
pub trait PageIndex {
    /// Returns all stored pages, newest first.
    fn list_entries(&self) -> RepoResult<Vec<IndexEntry>>;
}

/// File-backed listing over an opened page directory.
#[derive(Debug, Clone)]
pub struct FilePageIndex {
    dir: PageDir,
}

impl FilePageIndex {
    /// Constructs a listing over an opened page directory.
    pub fn new(dir: PageDir) -> Self {
        Self { dir }
    }
}

impl PageIndex for FilePageIndex {
    fn list_entries(&self) -> RepoResult<Vec<IndexEntry>> {
        self.dir.ensure_exists()?;

        let read_dir = std::fs::read_dir(self.dir.path())
            .map_err(|err| RepoError::io(self.dir.path(), err))?;

        let suffix = format!(".{PAGE_FILE_EXT}");
        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|err| RepoError::io(self.dir.path(), err))?;
            let Ok(file_type) = dir_entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }
            let name = dir_entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let Some(key) = name.strip_suffix(&suffix) else {
                continue;
            };
            if key.is_empty() {
                continue;
            }

            // A file that cannot be read or carries no stamp line still
            // gets an entry, just without an orderable stamp.
            let stamp_text = std::fs::read_to_string(dir_entry.path())
                .ok()
                .and_then(|blob| scan_stamp_line(&blob))
                .unwrap_or_default();
            let stamp = parse_stamp(&stamp_text);

            entries.push(IndexEntry {
                title: display_title(key),
                storage_key: key.to_string(),
                stamp_text,
                stamp,
            });
        }

        // Fix enumeration order before ranking so equal-rank entries land
        // deterministically regardless of how the OS walks the directory.
        entries.sort_by(|a, b| a.storage_key.cmp(&b.storage_key));
        entries.sort_by(compare_by_stamp);
        Ok(entries)
    }
}

/// Newest-first ranking with unparseable stamps at the bottom.
///
/// Entries without a parsed stamp compare equal to each other, so the
/// stable sort preserves their enumeration order.
fn compare_by_stamp(a: &IndexEntry, b: &IndexEntry) -> Ordering {
    match (a.stamp, b.stamp) {
        (Some(lhs), Some(rhs)) => rhs.cmp(&lhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
