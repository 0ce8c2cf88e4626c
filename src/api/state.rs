//! Application state for the API server.

use crate::db::Database;
use crate::service::AssignmentService;

/// Shared application state.
///
/// Generic over `D: Database` so tests and production can inject different
/// stores. The store handle is created once at startup and shared by every
/// request through the service.
pub struct AppState<D: Database> {
    service: AssignmentService<D>,
}

// Manual Clone impl - only the Arc inside the service is cloned, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState around the given store.
    pub fn new(db: impl Into<std::sync::Arc<D>>) -> Self {
        Self {
            service: AssignmentService::new(db),
        }
    }

    /// Get a reference to the assignment service.
    pub fn service(&self) -> &AssignmentService<D> {
        &self.service
    }

}
