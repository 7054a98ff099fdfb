use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use db::models::{JobFilter, JobUpdate, NewJob};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::AppState;
use crate::{auth::AdminUser, error::ApiError, validate};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list).post(create))
        .route("/jobs/:id", get(get_one).patch(update).delete(remove))
}

/// Query string accepted by `GET /jobs`. Unknown keys are a bad request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchParams {
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    /// Only the literal `true` enables the filter.
    pub has_equity: Option<String>,
}

impl From<SearchParams> for JobFilter {
    fn from(params: SearchParams) -> Self {
        JobFilter {
            title: params.title,
            min_salary: params.min_salary,
            has_equity: params.has_equity.as_deref() == Some("true"),
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(job) = payload?;
    validate::new_job(&job)?;

    let job = state.jobs.create(job).await?;
    info!(job_id = job.id, by = %admin.username, "job created");
    Ok((StatusCode::CREATED, Json(json!({ "job": job }))))
}

pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params?;
    let jobs = state.jobs.find_all(&params.into()).await?;
    Ok(Json(json!({ "jobs": jobs })))
}

pub async fn get_one(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    let job = state.jobs.get(id).await?;
    Ok(Json(json!({ "job": job })))
}

pub async fn update(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<JobUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    let Json(changes) = payload?;
    validate::job_update(&changes)?;

    let job = state.jobs.update(id, changes).await?;
    info!(job_id = id, by = %admin.username, "job updated");
    Ok(Json(json!({ "job": job })))
}

pub async fn remove(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    state.jobs.remove(id).await?;
    info!(job_id = id, by = %admin.username, "job removed");
    Ok(Json(json!({ "deleted": id.to_string() })))
}
