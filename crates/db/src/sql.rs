//! Helpers for assembling parameterized SQL by hand.
//!
//! Column names are interpolated into the generated text, values never are.
//! Anything interpolated must therefore come from a hardcoded field map or a
//! `&'static str` known at compile time; request data only ever travels
//! through [`SqlValue`] bind parameters.

use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::{DbError, DbResult};

/// A value destined for a `$N` bind parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    Decimal(Decimal),
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<Decimal> for SqlValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

/// Bind `values` onto `query` in order, so `values[0]` fills `$1`.
pub fn bind_values<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    values.into_iter().fold(query, |query, value| match value {
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Int(v) => query.bind(v),
        SqlValue::Decimal(v) => query.bind(v),
    })
}

/// A `SET` clause body and the values its placeholders refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    /// `"col_a"=$1, "col_b"=$2`
    pub set_cols: String,
    pub values: Vec<SqlValue>,
}

impl PartialUpdate {
    /// Index of the first placeholder free for the caller's own parameters
    /// (typically the `WHERE id = $N` of the update).
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Build the `SET` clause for a partial update.
///
/// Each payload key is translated through `field_map` (logical name to
/// column name); keys without an entry are used verbatim. Placeholders are
/// numbered from `$1` in payload order and `values` follows the same order.
///
/// Returns [`DbError::EmptyUpdate`] when `payload` is empty, since an empty
/// `SET` clause is not valid SQL.
pub fn sql_for_partial_update(
    payload: Vec<(&str, SqlValue)>,
    field_map: &[(&str, &str)],
) -> DbResult<PartialUpdate> {
    if payload.is_empty() {
        return Err(DbError::EmptyUpdate);
    }

    let mut cols = Vec::with_capacity(payload.len());
    let mut values = Vec::with_capacity(payload.len());

    for (idx, (key, value)) in payload.into_iter().enumerate() {
        let column = field_map
            .iter()
            .find(|(logical, _)| *logical == key)
            .map_or(key, |(_, column)| *column);
        cols.push(format!("\"{column}\"=${}", idx + 1));
        values.push(value);
    }

    Ok(PartialUpdate {
        set_cols: cols.join(", "),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_one_item() {
        let result = sql_for_partial_update(
            vec![("field1", "val1".into())],
            &[("field1", "field1"), ("field2", "val2")],
        )
        .unwrap();

        assert_eq!(result.set_cols, "\"field1\"=$1");
        assert_eq!(result.values, vec![SqlValue::from("val1")]);
    }

    #[test]
    fn updates_two_items() {
        let result = sql_for_partial_update(
            vec![("field1", "val1".into()), ("field2", "val2".into())],
            &[("field2", "field2")],
        )
        .unwrap();

        assert_eq!(result.set_cols, "\"field1\"=$1, \"field2\"=$2");
        assert_eq!(
            result.values,
            vec![SqlValue::from("val1"), SqlValue::from("val2")]
        );
    }

    #[test]
    fn mapped_keys_use_the_column_name() {
        let result = sql_for_partial_update(
            vec![("name", "Acme".into()), ("numEmployees", 12.into())],
            &[("numEmployees", "num_employees"), ("logoUrl", "logo_url")],
        )
        .unwrap();

        assert_eq!(result.set_cols, "\"name\"=$1, \"num_employees\"=$2");
        assert_eq!(result.values, vec![SqlValue::from("Acme"), SqlValue::Int(12)]);
    }

    #[test]
    fn placeholders_line_up_with_values() {
        let payload: Vec<(&str, SqlValue)> = vec![
            ("a", "x".into()),
            ("b", 2.into()),
            ("c", Decimal::new(5, 1).into()),
            ("d", "y".into()),
        ];
        let result = sql_for_partial_update(payload.clone(), &[]).unwrap();

        let pairs: Vec<&str> = result.set_cols.split(", ").collect();
        assert_eq!(pairs.len(), payload.len());
        assert_eq!(result.values.len(), payload.len());
        for (i, pair) in pairs.iter().enumerate() {
            assert_eq!(*pair, format!("\"{}\"=${}", payload[i].0, i + 1));
            assert_eq!(result.values[i], payload[i].1);
        }
        assert_eq!(result.next_placeholder(), 5);
    }

    #[test]
    fn empty_payload_is_rejected() {
        let err = sql_for_partial_update(Vec::new(), &[("field1", "field1")]).unwrap_err();
        assert!(matches!(err, DbError::EmptyUpdate));
    }
}
