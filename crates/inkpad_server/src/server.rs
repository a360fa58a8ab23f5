//! Server assembly and lifecycle.

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handlers::{AppState, SharedState};
use crate::router::build_router;
use inkpad_core::{open_store, FilePageIndex, FilePageRepository};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Inkpad HTTP server over one page directory.
pub struct InkpadServer {
    config: ServerConfig,
}

impl InkpadServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Opens the page store and builds the router (useful for testing).
    pub fn router(&self) -> Result<axum::Router, ServerError> {
        let state = build_state(&self.config)?;
        Ok(build_router(state))
    }

    /// Starts serving requests until the process exits.
    pub async fn serve(self) -> Result<(), ServerError> {
        let app = self.router()?;
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        log::info!(
            "event=server_start module=server status=ok addr={} data_dir={}",
            self.config.bind_addr,
            self.config.data_dir.display()
        );
        axum::serve(listener, app)
            .await
            .map_err(|err| ServerError::Internal(err.to_string()))
    }
}

fn build_state(config: &ServerConfig) -> Result<SharedState, ServerError> {
    let store = open_store(&config.data_dir)?;
    Ok(Arc::new(AppState {
        repo: FilePageRepository::new(store.clone()),
        index: FilePageIndex::new(store),
    }))
}
