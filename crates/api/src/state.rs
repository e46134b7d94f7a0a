use std::sync::Arc;

use scrawl_core::usecase::NoteUseCases;

use crate::config::ServerConfig;

/// Shared application state available to all axum handlers via
/// `State<AppState>`.
///
/// Constructed once at startup and cheaply cloneable (inner data is behind
/// `Arc`). This is the explicit wiring seam: swap the repository behind
/// `notes` and every handler follows, which is also how tests substitute a
/// fresh store per case.
#[derive(Clone)]
pub struct AppState {
    /// The five note use cases bound to the configured repository.
    pub notes: Arc<NoteUseCases>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
