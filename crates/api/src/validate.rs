//! Field checks for job request bodies, run after deserialization.

use db::models::{JobUpdate, NewJob};
use rust_decimal::Decimal;

use crate::error::ApiError;

fn check_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::BadRequest("title must not be empty".into()));
    }
    Ok(())
}

fn check_salary(salary: Option<i32>) -> Result<(), ApiError> {
    match salary {
        Some(s) if s < 0 => Err(ApiError::BadRequest("salary must be at least 0".into())),
        _ => Ok(()),
    }
}

fn check_equity(equity: Option<Decimal>) -> Result<(), ApiError> {
    match equity {
        Some(e) if e < Decimal::ZERO || e > Decimal::ONE => Err(ApiError::BadRequest(
            "equity must be between 0 and 1".into(),
        )),
        _ => Ok(()),
    }
}

pub fn new_job(job: &NewJob) -> Result<(), ApiError> {
    check_title(&job.title)?;
    if job.company_handle.trim().is_empty() {
        return Err(ApiError::BadRequest("companyHandle must not be empty".into()));
    }
    check_salary(job.salary)?;
    check_equity(job.equity)
}

pub fn job_update(changes: &JobUpdate) -> Result<(), ApiError> {
    if changes.is_empty() {
        return Err(ApiError::BadRequest("no data to update".into()));
    }
    if let Some(title) = &changes.title {
        check_title(title)?;
    }
    check_salary(changes.salary)?;
    check_equity(changes.equity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> NewJob {
        NewJob {
            title: "newJob".into(),
            salary: Some(100_000),
            equity: Some(Decimal::new(2, 1)),
            company_handle: "c1".into(),
        }
    }

    #[test]
    fn accepts_a_valid_job() {
        assert!(new_job(&job()).is_ok());
    }

    #[test]
    fn rejects_blank_title_and_handle() {
        assert!(new_job(&NewJob { title: " ".into(), ..job() }).is_err());
        assert!(new_job(&NewJob { company_handle: String::new(), ..job() }).is_err());
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(new_job(&NewJob { salary: Some(-1), ..job() }).is_err());
        assert!(new_job(&NewJob { equity: Some(Decimal::new(11, 1)), ..job() }).is_err());
        assert!(new_job(&NewJob { equity: Some(Decimal::ONE), ..job() }).is_ok());
    }

    #[test]
    fn update_needs_at_least_one_field() {
        assert!(job_update(&JobUpdate::default()).is_err());
        assert!(job_update(&JobUpdate { salary: Some(5), ..Default::default() }).is_ok());
    }
}
