//! Page persistence contract and file-backed implementation.
//!
//! # Responsibility
//! - Provide save/load/delete over one file per page.
//! - Apply the codec on save and the full decode on load.
//!
//! # Invariants
//! - A save fully replaces the page file via temp-file-then-rename, so a
//!   crash leaves either the old or the new content, never a mix.
//! - Page files are written with owner-only permissions.
//! - A missing file is `Ok(None)` on load and `RepoError::NotFound` on
//!   delete; both are distinct from transport failures.

use crate::codec::{decode_page, encode_page, parse_stamp, strip_stamp_label};
use crate::model::page::{
    display_title, is_safe_storage_key, storage_key, Page, PageValidationError,
};
use crate::store::{PageDir, StoreError};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for page persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Page input failed validation before any filesystem work.
    Validation(PageValidationError),
    /// Derived storage key is unusable as a path component.
    InvalidKey(String),
    /// No file exists for the requested title.
    NotFound(String),
    /// Page directory bootstrap failed.
    Store(StoreError),
    /// Filesystem rejected the operation.
    Io { path: PathBuf, source: io::Error },
}

impl RepoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "unusable storage key `{key}`"),
            Self::NotFound(title) => write!(f, "page not found: {title}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "page I/O failure at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::InvalidKey(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<PageValidationError> for RepoError {
    fn from(value: PageValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Read model for one loaded page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// Display title recovered from the filename.
    pub title: String,
    /// Filename stem the page is stored under.
    pub storage_key: String,
    /// Body text, outer whitespace trimmed.
    pub body: String,
    /// Stamp value text, label stripped; empty when the blob is malformed.
    pub stamp_text: String,
    /// Parsed stamp, when `stamp_text` matches the fixed format.
    pub stamp: Option<DateTime<FixedOffset>>,
}

/// Repository interface for single-page operations.
pub trait PageRepository {
    /// Persists one page, fully replacing any previous file.
    fn save_page(&self, page: &Page, stamp: DateTime<Utc>) -> RepoResult<()>;
    /// Loads one page by display title; `None` when no file exists.
    fn load_page(&self, title: &str) -> RepoResult<Option<PageRecord>>;
    /// Removes one page file; `NotFound` when it does not exist.
    fn delete_page(&self, title: &str) -> RepoResult<()>;
}

/// File-backed page repository over an opened page directory.
#[derive(Debug, Clone)]
pub struct FilePageRepository {
    dir: PageDir,
}

impl FilePageRepository {
    /// Constructs a repository from an opened page directory.
    pub fn new(dir: PageDir) -> Self {
        Self { dir }
    }

    fn resolve_key(&self, title: &str) -> RepoResult<String> {
        let key = storage_key(title);
        if !is_safe_storage_key(&key) {
            return Err(RepoError::InvalidKey(key));
        }
        Ok(key)
    }
}

impl PageRepository for FilePageRepository {
    fn save_page(&self, page: &Page, stamp: DateTime<Utc>) -> RepoResult<()> {
        page.validate()?;
        let key = self.resolve_key(&page.title)?;
        let path = self.dir.page_path(&key);
        let blob = encode_page(page.title.trim(), &page.body, stamp);

        // Temp file lands in the page directory so the final rename never
        // crosses filesystems. NamedTempFile opens with owner-only
        // permissions, which the rename carries over to the page file.
        let mut tmp = NamedTempFile::new_in(self.dir.path())
            .map_err(|err| RepoError::io(self.dir.path(), err))?;
        tmp.write_all(blob.as_bytes())
            .map_err(|err| RepoError::io(&path, err))?;
        tmp.persist(&path)
            .map_err(|err| RepoError::io(&path, err.error))?;
        Ok(())
    }

    fn load_page(&self, title: &str) -> RepoResult<Option<PageRecord>> {
        let key = self.resolve_key(title)?;
        self.dir.ensure_exists()?;

        let path = self.dir.page_path(&key);
        let blob = match std::fs::read_to_string(&path) {
            Ok(blob) => blob,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RepoError::io(&path, err)),
        };

        let decoded = decode_page(&blob);
        let value = strip_stamp_label(&decoded.stamp_text);
        Ok(Some(PageRecord {
            title: display_title(&key),
            storage_key: key,
            body: decoded.body,
            stamp_text: value.to_string(),
            stamp: parse_stamp(value),
        }))
    }

    fn delete_page(&self, title: &str) -> RepoResult<()> {
        let key = self.resolve_key(title)?;
        let path = self.dir.page_path(&key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(RepoError::NotFound(title.trim().to_string()))
            }
            Err(err) => Err(RepoError::io(&path, err)),
        }
    }
}
