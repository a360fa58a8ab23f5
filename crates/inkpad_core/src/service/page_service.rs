//! Page use-case service.
//!
//! # Responsibility
//! - Provide create/edit/get/delete APIs over a page repository.
//! - Validate titles and bodies before storage is touched.
//! - Keep the creation stamp stable across edits.
//!
//! # Invariants
//! - `create_page` and `save_page` use full content replacement semantics;
//!   there is no merge and no versioning.
//! - An edit of an existing page reuses the stored creation stamp when it
//!   is readable; the caller-supplied clock is only used for new pages or
//!   pages whose stamp was lost.
//! - The service never reads the wall clock; callers inject it.

use crate::model::page::{validate_title, Page, PageValidationError};
use crate::repo::page_repo::{PageRecord, PageRepository, RepoError};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for page use-cases.
#[derive(Debug)]
pub enum PageServiceError {
    /// Input failed title/body validation.
    Validation(PageValidationError),
    /// Target page does not exist.
    PageNotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for PageServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PageNotFound(title) => write!(f, "page not found: {title}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent page state: {details}"),
        }
    }
}

impl Error for PageServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::PageNotFound(_) | Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for PageServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(title) => Self::PageNotFound(title),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

impl From<PageValidationError> for PageServiceError {
    fn from(value: PageValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Page service facade over repository implementations.
pub struct PageService<R: PageRepository> {
    repo: R,
}

impl<R: PageRepository> PageService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a page, stamping it with the caller-supplied clock.
    ///
    /// Saving a title that already exists replaces the stored page; there
    /// is exactly one file per normalized title.
    pub fn create_page(
        &self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<PageRecord, PageServiceError> {
        let page = Page::new(title, body);
        page.validate()?;

        self.repo.save_page(&page, now)?;
        self.repo
            .load_page(&page.title)?
            .ok_or(PageServiceError::InconsistentState(
                "created page not found in read-back",
            ))
    }

    /// Replaces page content, keeping the original creation stamp.
    ///
    /// Falls back to the caller-supplied clock when the page is new or its
    /// stored stamp cannot be read back.
    pub fn save_page(
        &self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<PageRecord, PageServiceError> {
        let page = Page::new(title, body);
        page.validate()?;

        let stamp = self
            .repo
            .load_page(&page.title)?
            .and_then(|existing| existing.stamp)
            .map(|stamp| stamp.with_timezone(&Utc))
            .unwrap_or(now);

        self.repo.save_page(&page, stamp)?;
        self.repo
            .load_page(&page.title)?
            .ok_or(PageServiceError::InconsistentState(
                "saved page not found in read-back",
            ))
    }

    /// Gets one page by display title; `None` routes callers to the
    /// create/edit flow.
    pub fn get_page(&self, title: &str) -> Result<Option<PageRecord>, PageServiceError> {
        validate_title(title)?;
        Ok(self.repo.load_page(title)?)
    }

    /// Deletes one page by display title.
    pub fn delete_page(&self, title: &str) -> Result<(), PageServiceError> {
        validate_title(title)?;
        self.repo.delete_page(title)?;
        Ok(())
    }
}
