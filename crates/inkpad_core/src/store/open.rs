//! Page directory opening.
//!
//! # Responsibility
//! - Create the page directory on demand and hand out a validated handle.
//! - Emit `store_open` events so startup problems are visible in the log.
//!
//! # Invariants
//! - A returned `PageDir` points at an existing directory.
//! - Reopening the same location succeeds and changes nothing.

use super::{PageDir, StoreError, StoreResult};
use log::{error, info};
use std::path::Path;
use std::time::Instant;

/// Opens the page directory, creating it if absent.
///
/// # Side effects
/// - May create the directory (and parents).
/// - Emits `store_open` log events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<PageDir> {
    let started_at = Instant::now();
    let root = path.as_ref().to_path_buf();
    info!(
        "event=store_open module=store status=start path={}",
        root.display()
    );

    if let Err(err) = std::fs::create_dir_all(&root) {
        error!(
            "event=store_open module=store status=error duration_ms={} error_code=create_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(StoreError::io(root, err));
    }

    // The path may still resolve to a non-directory, e.g. via a symlink.
    if !root.is_dir() {
        error!(
            "event=store_open module=store status=error duration_ms={} error_code=not_a_directory path={}",
            started_at.elapsed().as_millis(),
            root.display()
        );
        return Err(StoreError::NotADirectory(root));
    }

    info!(
        "event=store_open module=store status=ok duration_ms={} path={}",
        started_at.elapsed().as_millis(),
        root.display()
    );
    Ok(PageDir::new(root))
}
