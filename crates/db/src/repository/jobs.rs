//! Job CRUD operations.
//!
//! Each operation is a single statement. Update and delete detect a missing
//! row from the empty `RETURNING` set rather than checking first.

use sqlx::PgPool;
use tracing::debug;

use crate::{
    models::{JobDetail, JobFilter, JobListing, JobRow, JobUpdate, NewJob, JOB_FIELD_MAP},
    repository::companies,
    search::build_search_query,
    sql::{bind_values, sql_for_partial_update},
    DbError,
};

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

fn job_not_found(id: i32) -> DbError {
    DbError::NotFound(format!("no job: {id}"))
}

/// Insert a new job and return it as stored.
pub async fn create_job(pool: &PgPool, job: &NewJob) -> Result<JobRow, DbError> {
    let row = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (title, salary, equity, company_handle)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, salary, equity, company_handle
        "#,
    )
    .bind(&job.title)
    .bind(job.salary)
    .bind(job.equity)
    .bind(&job.company_handle)
    .fetch_one(pool)
    .await?;

    debug!(job_id = row.id, "created job");
    Ok(row)
}

/// Return jobs matching `filter`, ordered by title.
pub async fn find_jobs(pool: &PgPool, filter: &JobFilter) -> Result<Vec<JobListing>, DbError> {
    let search = build_search_query(filter);
    debug!(sql = %search.query, params = search.values.len(), "searching jobs");

    let rows = bind_values(sqlx::query_as::<_, JobListing>(&search.query), search.values)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Fetch a job together with the company that posted it.
///
/// Returns `DbError::NotFound` if there is no job with this id.
pub async fn get_job(pool: &PgPool, id: i32) -> Result<JobDetail, DbError> {
    let job = sqlx::query_as::<_, JobRow>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| job_not_found(id))?;

    let company = companies::get_company_summary(pool, &job.company_handle).await?;
    Ok(JobDetail::new(job, company))
}

/// Apply a partial update to a job and return the updated row.
///
/// Returns `DbError::EmptyUpdate` when `changes` sets nothing, and
/// `DbError::NotFound` when no row has this id.
pub async fn update_job(pool: &PgPool, id: i32, changes: JobUpdate) -> Result<JobRow, DbError> {
    let update = sql_for_partial_update(changes.into_payload(), JOB_FIELD_MAP)?;
    let sql = format!(
        "UPDATE jobs SET {} WHERE id = ${} RETURNING {JOB_COLUMNS}",
        update.set_cols,
        update.next_placeholder(),
    );
    debug!(%sql, job_id = id, "updating job");

    bind_values(sqlx::query_as::<_, JobRow>(&sql), update.values)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| job_not_found(id))
}

/// Permanently delete a job.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn remove_job(pool: &PgPool, id: i32) -> Result<(), DbError> {
    sqlx::query_scalar::<_, i32>("DELETE FROM jobs WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| job_not_found(id))?;

    debug!(job_id = id, "removed job");
    Ok(())
}
