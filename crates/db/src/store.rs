//! The `JobStore` trait and its Postgres implementation.

use async_trait::async_trait;

use crate::{
    models::{JobDetail, JobFilter, JobListing, JobRow, JobUpdate, NewJob},
    repository::jobs,
    DbPool, DbResult,
};

/// Everything the HTTP layer needs from job storage.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn create(&self, job: NewJob) -> DbResult<JobRow>;
    async fn find_all(&self, filter: &JobFilter) -> DbResult<Vec<JobListing>>;
    async fn get(&self, id: i32) -> DbResult<JobDetail>;
    async fn update(&self, id: i32, changes: JobUpdate) -> DbResult<JobRow>;
    async fn remove(&self, id: i32) -> DbResult<()>;
}

/// PostgreSQL implementation of [`JobStore`].
#[derive(Clone)]
pub struct PgJobStore {
    pool: DbPool,
}

impl PgJobStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn create(&self, job: NewJob) -> DbResult<JobRow> {
        jobs::create_job(&self.pool, &job).await
    }

    async fn find_all(&self, filter: &JobFilter) -> DbResult<Vec<JobListing>> {
        jobs::find_jobs(&self.pool, filter).await
    }

    async fn get(&self, id: i32) -> DbResult<JobDetail> {
        jobs::get_job(&self.pool, id).await
    }

    async fn update(&self, id: i32, changes: JobUpdate) -> DbResult<JobRow> {
        jobs::update_job(&self.pool, id, changes).await
    }

    async fn remove(&self, id: i32) -> DbResult<()> {
        jobs::remove_job(&self.pool, id).await
    }
}
