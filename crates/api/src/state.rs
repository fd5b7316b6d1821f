use std::sync::Arc;

use filmstore_db::FilmStore;

use crate::config::ServerConfig;
use crate::middleware::request_counter::RequestCounter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Handle on the JSON document backing the film collection.
    pub store: FilmStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Running count of GET requests since startup.
    pub get_requests: RequestCounter,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: FilmStore::new(&config.data_path),
            config: Arc::new(config),
            get_requests: RequestCounter::default(),
        }
    }
}
