//! Application state.

use std::sync::Arc;

use db::{DbPool, JobStore, PgJobStore};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobStore>,
    /// HS256 key used to sign and verify bearer tokens.
    pub secret_key: Arc<str>,
}

impl AppState {
    pub fn new(jobs: Arc<dyn JobStore>, secret_key: impl Into<Arc<str>>) -> Self {
        Self {
            jobs,
            secret_key: secret_key.into(),
        }
    }

    /// State backed by Postgres.
    pub fn from_pool(pool: DbPool, secret_key: impl Into<Arc<str>>) -> Self {
        Self::new(Arc::new(PgJobStore::new(pool)), secret_key)
    }
}
