//! Application state management.

use crate::db::Store;

/// Application state shared across all handlers.
///
/// Constructed once in `main` after bootstrap completes and shared via
/// `Arc`; nothing mutates it afterwards, so handlers read it without locks.
#[derive(Clone)]
pub struct AppState {
    /// The store handle carrying the pool and the readiness decision.
    pub store: Store,
}

impl AppState {
    /// Creates the application state around an initialized store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
