//! Page directory bootstrap.
//!
//! # Responsibility
//! - Open and validate the flat directory that holds one file per page.
//! - Resolve page file paths from storage keys.
//!
//! # Invariants
//! - All page files live directly in the directory; no nesting, ever.
//! - Opening an existing directory is idempotent.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

mod open;

pub use open::open_store;

/// File extension of every persisted page.
pub const PAGE_FILE_EXT: &str = "md";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while opening or preparing the page directory.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem rejected an operation on the given path.
    Io { path: PathBuf, source: io::Error },
    /// The configured location exists but is not a directory.
    NotADirectory(PathBuf),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "page store I/O failure at `{}`: {source}", path.display())
            }
            Self::NotADirectory(path) => {
                write!(f, "page store path `{}` is not a directory", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NotADirectory(_) => None,
        }
    }
}

/// Handle to an opened page directory.
///
/// Carries no open file descriptors; it is a validated root path that
/// repositories resolve page files against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDir {
    root: PathBuf,
}

impl PageDir {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory holding the page files.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Absolute or relative path of one page file.
    ///
    /// The key must already have passed the storage-key safety check; this
    /// function only joins and appends the fixed extension.
    pub fn page_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{PAGE_FILE_EXT}"))
    }

    /// Creates the directory if it is missing.
    ///
    /// Listing and read paths call this lazily, so a fresh deployment can
    /// start from an empty location without a setup step.
    pub fn ensure_exists(&self) -> StoreResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|err| StoreError::io(&self.root, err))
    }
}

#[cfg(test)]
mod tests {
    use super::{PageDir, PAGE_FILE_EXT};
    use std::path::PathBuf;

    #[test]
    fn page_path_appends_fixed_extension() {
        let dir = PageDir::new(PathBuf::from("/tmp/pages"));
        assert_eq!(
            dir.page_path("Shopping_List"),
            PathBuf::from(format!("/tmp/pages/Shopping_List.{PAGE_FILE_EXT}"))
        );
    }
}
