//! Company lookups used to enrich jobs.

use sqlx::PgPool;

use crate::{models::CompanySummary, DbError};

/// Fetch the public description of a company by its handle.
pub async fn get_company_summary(pool: &PgPool, handle: &str) -> Result<CompanySummary, DbError> {
    let row = sqlx::query_as::<_, CompanySummary>(
        r#"
        SELECT handle, name, description, num_employees, logo_url
        FROM companies
        WHERE handle = $1
        "#,
    )
    .bind(handle)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DbError::NotFound(format!("no company: {handle}")))?;

    Ok(row)
}
