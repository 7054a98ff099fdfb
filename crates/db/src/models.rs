//! Row structs and input types for the `jobs` and `companies` tables.
//!
//! These are *persistence* models: field names follow the columns, the
//! serialized names follow the camelCase JSON the API exposes.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::sql::SqlValue;

// ---------------------------------------------------------------------------
// jobs
// ---------------------------------------------------------------------------

/// A persisted job row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    /// Fraction of the company offered, `0..=1`. Serialized as a string.
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// A job as returned by the search endpoint, with its company's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
    pub company_name: String,
}

/// A single job with its owning company inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company: CompanySummary,
}

impl JobDetail {
    pub fn new(job: JobRow, company: CompanySummary) -> Self {
        Self {
            id: job.id,
            title: job.title,
            salary: job.salary,
            equity: job.equity,
            company,
        }
    }
}

/// Data needed to insert a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Logical update field name to `jobs` column.
///
/// The job's updatable fields already match their columns; the keys
/// produced by [`JobUpdate::into_payload`] are all constants listed here.
pub const JOB_FIELD_MAP: &[(&str, &str)] = &[
    ("title", "title"),
    ("salary", "salary"),
    ("equity", "equity"),
];

/// A field that may be left out but, when given, must not be `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A partial update of a job. The company and id never change.
///
/// Absent fields are left alone; an explicit `null` fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub salary: Option<i32>,
    #[serde(default, deserialize_with = "present")]
    pub equity: Option<Decimal>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.equity.is_none()
    }

    /// The fields that are set, in declaration order, keyed by logical name.
    pub fn into_payload(self) -> Vec<(&'static str, SqlValue)> {
        let mut payload = Vec::with_capacity(3);
        if let Some(title) = self.title {
            payload.push(("title", title.into()));
        }
        if let Some(salary) = self.salary {
            payload.push(("salary", salary.into()));
        }
        if let Some(equity) = self.equity {
            payload.push(("equity", equity.into()));
        }
        payload
    }
}

/// Search criteria for listing jobs. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Inclusive lower bound on salary.
    pub min_salary: Option<i32>,
    /// Only jobs offering equity greater than zero.
    #[serde(default)]
    pub has_equity: bool,
}

// ---------------------------------------------------------------------------
// companies
// ---------------------------------------------------------------------------

/// The public description of a company, inlined into job details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_payload_follows_field_order() {
        let update = JobUpdate {
            title: Some("Engineer".into()),
            salary: None,
            equity: Some(Decimal::new(5, 2)),
        };

        let payload = update.into_payload();
        assert_eq!(
            payload,
            vec![
                ("title", SqlValue::from("Engineer")),
                ("equity", SqlValue::Decimal(Decimal::new(5, 2))),
            ]
        );
    }

    #[test]
    fn empty_update_has_no_payload() {
        let update = JobUpdate::default();
        assert!(update.is_empty());
        assert!(update.into_payload().is_empty());
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let err = serde_json::from_value::<JobUpdate>(json!({ "companyHandle": "c2" }));
        assert!(err.is_err());
    }

    #[test]
    fn update_rejects_explicit_null() {
        for body in [
            json!({ "title": "t", "salary": null }),
            json!({ "title": null }),
            json!({ "equity": null }),
        ] {
            assert!(serde_json::from_value::<JobUpdate>(body).is_err());
        }
    }

    #[test]
    fn update_leaves_absent_fields_unset() {
        let update: JobUpdate = serde_json::from_value(json!({ "salary": 5, "equity": "0.3" })).unwrap();
        assert_eq!(
            update,
            JobUpdate {
                title: None,
                salary: Some(5),
                equity: Some(Decimal::new(3, 1)),
            }
        );
    }

    #[test]
    fn equity_serializes_as_string() {
        let job = JobRow {
            id: 1,
            title: "Job1".into(),
            salary: Some(100),
            equity: Some(Decimal::new(1, 1)),
            company_handle: "c1".into(),
        };

        assert_eq!(
            serde_json::to_value(&job).unwrap(),
            json!({
                "id": 1,
                "title": "Job1",
                "salary": 100,
                "equity": "0.1",
                "companyHandle": "c1",
            })
        );
    }
}
