//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! No business logic — pure SQL.

pub mod companies;
pub mod jobs;
