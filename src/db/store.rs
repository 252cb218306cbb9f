//! Store handle: connection pool plus the readiness decision.

use sqlx::PgPool;
use thiserror::Error;

/// Terminal outcome of store initialization.
///
/// Set exactly once at startup and read-only thereafter; request handlers
/// consult it through [`Store::pool`] and never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// No connection string was configured; no attempt was ever made.
    NoConnection,
    /// Schema is in place and the catalog is seeded.
    Ready,
    /// Every initialization attempt failed; running degraded until restart.
    Exhausted,
}

impl InitOutcome {
    /// Label reported by the health endpoint.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "connected",
            Self::NoConnection | Self::Exhausted => "unavailable",
        }
    }
}

/// The store is not usable; data-dependent operations fail fast.
#[derive(Debug, Error)]
#[error("store unavailable: service is running in degraded mode")]
pub struct StoreUnavailable;

/// Handle to the relational store shared by all request handlers.
///
/// Owns the connection pool (if one was established) and the terminal
/// [`InitOutcome`]. Constructed once by [`initialize_store`] and passed
/// through application state rather than held as a global.
///
/// [`initialize_store`]: crate::db::initialize_store
#[derive(Clone)]
pub struct Store {
    pool: Option<PgPool>,
    outcome: InitOutcome,
}

impl Store {
    /// Creates a ready store around an initialized pool.
    #[must_use]
    pub fn ready(pool: PgPool) -> Self {
        Self {
            pool: Some(pool),
            outcome: InitOutcome::Ready,
        }
    }

    /// Creates a degraded store that fails fast on every query.
    ///
    /// # Panics
    /// Panics if called with [`InitOutcome::Ready`], which requires a pool.
    #[must_use]
    pub fn unavailable(outcome: InitOutcome) -> Self {
        assert!(
            outcome != InitOutcome::Ready,
            "a ready store requires a pool"
        );
        Self {
            pool: None,
            outcome,
        }
    }

    /// Whether request handlers may query the store.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.outcome == InitOutcome::Ready
    }

    /// The terminal initialization outcome.
    #[must_use]
    pub fn outcome(&self) -> InitOutcome {
        self.outcome
    }

    /// Borrows the pool, failing fast when running degraded.
    ///
    /// This is the single entry point for data access: in degraded mode it
    /// returns [`StoreUnavailable`] instead of attempting a connection.
    ///
    /// # Errors
    /// Returns [`StoreUnavailable`] when the store never became ready.
    pub fn pool(&self) -> Result<&PgPool, StoreUnavailable> {
        match (&self.pool, self.outcome) {
            (Some(pool), InitOutcome::Ready) => Ok(pool),
            _ => Err(StoreUnavailable),
        }
    }
}
