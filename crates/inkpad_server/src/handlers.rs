//! Route handlers.
//!
//! Path segments arrive in storage-key form (underscores); handlers map
//! them back to display titles before calling the core services, which is
//! the only translation this layer performs. The wall clock is read here
//! and injected into the core, never inside it.

use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use inkpad_core::{
    display_title, FilePageIndex, FilePageRepository, IndexService, PageListItem, PageRecord,
    PageService,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Shared per-process state: both repositories over the same page dir.
#[derive(Clone)]
pub struct AppState {
    pub repo: FilePageRepository,
    pub index: FilePageIndex,
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Deserialize)]
pub struct CreatePageRequest {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct SavePageRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct PageListResponse {
    pub pages: Vec<PageListItem>,
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn list_pages_handler(
    State(state): State<SharedState>,
) -> Result<Json<PageListResponse>, ApiError> {
    let pages = IndexService::new(state.index.clone()).list_pages()?;
    Ok(Json(PageListResponse { pages }))
}

pub async fn get_page_handler(
    State(state): State<SharedState>,
    Path(title): Path<String>,
) -> Result<Json<PageRecord>, ApiError> {
    let title = display_title(&title);
    let record = PageService::new(state.repo.clone())
        .get_page(&title)?
        .ok_or(ApiError::NotFound(title))?;
    Ok(Json(record))
}

pub async fn create_page_handler(
    State(state): State<SharedState>,
    Json(request): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<PageRecord>), ApiError> {
    let record =
        PageService::new(state.repo.clone()).create_page(request.title, request.body, Utc::now())?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn save_page_handler(
    State(state): State<SharedState>,
    Path(title): Path<String>,
    Json(request): Json<SavePageRequest>,
) -> Result<Json<PageRecord>, ApiError> {
    let title = display_title(&title);
    let record = PageService::new(state.repo.clone()).save_page(title, request.body, Utc::now())?;
    Ok(Json(record))
}

pub async fn delete_page_handler(
    State(state): State<SharedState>,
    Path(title): Path<String>,
) -> Result<StatusCode, ApiError> {
    let title = display_title(&title);
    PageService::new(state.repo.clone()).delete_page(&title)?;
    Ok(StatusCode::NO_CONTENT)
}
