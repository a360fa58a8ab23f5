//! Page domain model.
//!
//! # Responsibility
//! - Define the editable page record (`title` + `body`).
//! - Validate titles against the allowed character set.
//! - Map display titles to filesystem storage keys and back.
//!
//! # Invariants
//! - `storage_key` and `display_title` are inverses for every valid title:
//!   spaces become underscores on the way in, underscores become spaces on
//!   the way out. Underscores are therefore rejected in display titles.
//! - Valid titles never contain `/`, `\` or `.`, which keeps every derived
//!   key a single safe path component.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Longest accepted display title, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 -]*$").expect("valid title regex"));

/// Validation failure for page input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Body is empty after trimming.
    EmptyBody,
    /// Title contains characters outside the allowed set.
    InvalidTitle(String),
    /// Title exceeds `TITLE_MAX_CHARS`.
    TitleTooLong(usize),
}

impl Display for PageValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "page title cannot be empty"),
            Self::EmptyBody => write!(f, "page body cannot be empty"),
            Self::InvalidTitle(title) => write!(
                f,
                "invalid page title `{title}`; expected letters, digits, spaces or hyphens"
            ),
            Self::TitleTooLong(len) => write!(
                f,
                "page title is {len} characters long; maximum is {TITLE_MAX_CHARS}"
            ),
        }
    }
}

impl Error for PageValidationError {}

/// Editable page content as supplied by callers.
///
/// The creation stamp is not part of this shape: it is injected by the
/// caller at save time and recovered from storage on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Human-readable title in display form (spaces, not underscores).
    pub title: String,
    /// Raw UTF-8 body text.
    pub body: String,
}

impl Page {
    /// Creates a page from caller-supplied title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Checks page input against the write contract.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyBody` when either field trims to nothing.
    /// - `InvalidTitle` when the title falls outside the allowed set.
    /// - `TitleTooLong` when the title exceeds `TITLE_MAX_CHARS`.
    pub fn validate(&self) -> Result<(), PageValidationError> {
        validate_title(&self.title)?;
        if self.body.trim().is_empty() {
            return Err(PageValidationError::EmptyBody);
        }
        Ok(())
    }
}

/// Validates one display title without requiring a body.
///
/// Read and delete paths accept a title alone, so the title rules are
/// exposed separately from `Page::validate`.
pub fn validate_title(title: &str) -> Result<(), PageValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(PageValidationError::EmptyTitle);
    }
    let chars = trimmed.chars().count();
    if chars > TITLE_MAX_CHARS {
        return Err(PageValidationError::TitleTooLong(chars));
    }
    if !TITLE_RE.is_match(trimmed) {
        return Err(PageValidationError::InvalidTitle(trimmed.to_string()));
    }
    Ok(())
}

/// Derives the filename stem for a display title.
///
/// The mapping is trim + space-to-underscore and nothing else, so it stays
/// reversible through `display_title`.
pub fn storage_key(title: &str) -> String {
    title.trim().replace(' ', "_")
}

/// Recovers the display title from a filename stem.
pub fn display_title(key: &str) -> String {
    key.replace('_', " ")
}

/// Reports whether a derived key is safe to use as a path component.
///
/// Storage code re-checks keys before touching the filesystem even though
/// service-level validation runs first; a key that fails here must never
/// reach a `Path::join`.
pub fn is_safe_storage_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::{
        display_title, is_safe_storage_key, storage_key, validate_title, Page,
        PageValidationError, TITLE_MAX_CHARS,
    };

    #[test]
    fn validate_accepts_plain_titles() {
        assert!(Page::new("Shopping List", "milk").validate().is_ok());
        assert!(Page::new("2026 plans", "a").validate().is_ok());
        assert!(Page::new("side-project", "b").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_fields() {
        assert_eq!(
            Page::new("", "body").validate(),
            Err(PageValidationError::EmptyTitle)
        );
        assert_eq!(
            Page::new("Title", "   ").validate(),
            Err(PageValidationError::EmptyBody)
        );
    }

    #[test]
    fn validate_rejects_path_separators_and_dots() {
        for title in ["../etc/passwd", "a/b", r"a\b", "notes.md", "_hidden"] {
            assert!(
                matches!(
                    validate_title(title),
                    Err(PageValidationError::InvalidTitle(_))
                ),
                "title `{title}` should be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_overlong_titles() {
        let long = "a".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(
            validate_title(&long),
            Err(PageValidationError::TitleTooLong(TITLE_MAX_CHARS + 1))
        );
    }

    #[test]
    fn storage_key_and_display_title_are_inverses() {
        assert_eq!(storage_key("Shopping List"), "Shopping_List");
        assert_eq!(display_title("Shopping_List"), "Shopping List");
        assert_eq!(display_title(&storage_key("  padded title ")), "padded title");
    }

    #[test]
    fn safe_key_check_refuses_traversal_shapes() {
        assert!(is_safe_storage_key("Shopping_List"));
        assert!(!is_safe_storage_key(""));
        assert!(!is_safe_storage_key(".."));
        assert!(!is_safe_storage_key("a/b"));
        assert!(!is_safe_storage_key("a.md"));
    }
}
