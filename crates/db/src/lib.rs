//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, typed row structs, the hand-assembled SQL for
//! partial updates and job search, and repository functions for the `jobs`
//! and `companies` tables. No HTTP concerns live here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod search;
pub mod sql;
pub mod store;

pub use error::{DbError, DbResult};
pub use pool::DbPool;
pub use store::{JobStore, PgJobStore};

#[cfg(test)]
mod search_tests;
