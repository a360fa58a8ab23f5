//! Listing use-case service.
//!
//! # Responsibility
//! - Turn raw index entries into display-ready listing items.
//!
//! # Invariants
//! - Item order is exactly the repository order: newest first, entries
//!   without a parseable stamp at the end.
//! - An entry with an unreadable stamp shows its raw stamp text (possibly
//!   empty) instead of being dropped.

use crate::codec::display_stamp;
use crate::repo::index_repo::{IndexEntry, PageIndex};
use crate::repo::page_repo::RepoResult;
use serde::Serialize;

/// Display-ready listing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageListItem {
    /// Display title (spaces, not underscores).
    pub title: String,
    /// Filename stem, usable as a link path segment.
    pub storage_key: String,
    /// Compact stamp rendering, or the raw unparsed text, or empty.
    pub stamp_display: String,
}

/// Listing service facade over index implementations.
pub struct IndexService<I: PageIndex> {
    index: I,
}

impl<I: PageIndex> IndexService<I> {
    /// Creates a service using the provided index implementation.
    pub fn new(index: I) -> Self {
        Self { index }
    }

    /// Lists all stored pages, newest first, ready for display.
    pub fn list_pages(&self) -> RepoResult<Vec<PageListItem>> {
        let entries = self.index.list_entries()?;
        Ok(entries.into_iter().map(project_entry).collect())
    }
}

fn project_entry(entry: IndexEntry) -> PageListItem {
    let stamp_display = match entry.stamp {
        Some(stamp) => display_stamp(stamp),
        None => entry.stamp_text,
    };
    PageListItem {
        title: entry.title,
        storage_key: entry.storage_key,
        stamp_display,
    }
}

#[cfg(test)]
mod tests {
    use super::{IndexService, PageListItem};
    use crate::codec::parse_stamp;
    use crate::repo::index_repo::{IndexEntry, PageIndex};
    use crate::repo::page_repo::RepoResult;
    use chrono::{TimeZone, Utc};

    struct FixedIndex(Vec<IndexEntry>);

    impl PageIndex for FixedIndex {
        fn list_entries(&self) -> RepoResult<Vec<IndexEntry>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn parsed_stamps_render_compact_and_raw_text_passes_through() {
        let text = Utc
            .with_ymd_and_hms(2026, 8, 7, 9, 0, 0)
            .unwrap()
            .to_rfc2822();
        let index = FixedIndex(vec![
            IndexEntry {
                title: "Good".to_string(),
                storage_key: "Good".to_string(),
                stamp_text: text.clone(),
                stamp: parse_stamp(&text),
            },
            IndexEntry {
                title: "Bad".to_string(),
                storage_key: "Bad".to_string(),
                stamp_text: "scribbles".to_string(),
                stamp: None,
            },
            IndexEntry {
                title: "Blank".to_string(),
                storage_key: "Blank".to_string(),
                stamp_text: String::new(),
                stamp: None,
            },
        ]);

        let items = IndexService::new(index).list_pages().unwrap();
        assert_eq!(
            items,
            vec![
                PageListItem {
                    title: "Good".to_string(),
                    storage_key: "Good".to_string(),
                    stamp_display: "2026-08-07 09:00:00".to_string(),
                },
                PageListItem {
                    title: "Bad".to_string(),
                    storage_key: "Bad".to_string(),
                    stamp_display: "scribbles".to_string(),
                },
                PageListItem {
                    title: "Blank".to_string(),
                    storage_key: "Blank".to_string(),
                    stamp_display: String::new(),
                },
            ]
        );
    }
}
