//! Tests for job search query assembly (no database required).

use rust_decimal::Decimal;

use crate::models::JobFilter;
use crate::search::{build_search_query, WhereBuilder};
use crate::sql::SqlValue;

fn filter(title: Option<&str>, min_salary: Option<i32>, has_equity: bool) -> JobFilter {
    JobFilter {
        title: title.map(str::to_owned),
        min_salary,
        has_equity,
    }
}

#[test]
fn no_filters_omits_where_clause() {
    let q = build_search_query(&JobFilter::default());

    assert!(!q.query.contains("WHERE"));
    assert!(q.query.ends_with(" ORDER BY j.title"));
    assert!(q.values.is_empty());
}

#[test]
fn listings_inner_join_their_company() {
    let q = build_search_query(&JobFilter::default());

    assert!(q.query.contains(" FROM jobs j JOIN companies AS c ON c.handle = j.company_handle"));
    assert!(!q.query.contains("LEFT JOIN"));
}

#[test]
fn min_salary_alone_is_first_placeholder() {
    let q = build_search_query(&filter(None, Some(199), false));

    assert!(q.query.contains(" WHERE j.salary >= $1 ORDER BY"));
    assert!(!q.query.contains("$2"));
    assert_eq!(q.values, vec![SqlValue::Int(199)]);
}

#[test]
fn zero_min_salary_still_filters() {
    let q = build_search_query(&filter(None, Some(0), false));

    assert!(q.query.contains("j.salary >= $1"));
    assert_eq!(q.values, vec![SqlValue::Int(0)]);
}

#[test]
fn title_is_wrapped_in_wildcards_and_case_insensitive() {
    let q = build_search_query(&filter(Some("Job1"), None, false));

    assert!(q.query.contains("j.title ILIKE $1"));
    assert_eq!(q.values, vec![SqlValue::from("%Job1%")]);
}

#[test]
fn empty_title_is_ignored() {
    let q = build_search_query(&filter(Some(""), None, false));

    assert!(!q.query.contains("WHERE"));
    assert!(q.values.is_empty());
}

#[test]
fn has_equity_binds_nothing() {
    let q = build_search_query(&filter(None, None, true));

    assert!(q.query.contains(" WHERE j.equity > 0 ORDER BY"));
    assert!(q.values.is_empty());
}

#[test]
fn equity_and_min_salary_join_with_and() {
    let q = build_search_query(&filter(None, Some(199), true));

    assert!(q.query.contains(" WHERE j.salary >= $1 AND j.equity > 0 ORDER BY"));
    assert_eq!(q.values, vec![SqlValue::Int(199)]);
}

#[test]
fn all_filters_number_contiguously() {
    let q = build_search_query(&filter(Some("eng"), Some(50_000), true));

    assert!(q
        .query
        .contains(" WHERE j.title ILIKE $1 AND j.salary >= $2 AND j.equity > 0 ORDER BY"));
    assert_eq!(
        q.values,
        vec![SqlValue::from("%eng%"), SqlValue::Int(50_000)]
    );
}

#[test]
fn where_builder_skips_numbers_for_raw_predicates() {
    let mut clauses = WhereBuilder::new();
    clauses
        .raw("a IS NOT NULL")
        .bind("b =", 1)
        .raw("c > 0")
        .bind("d <", Decimal::ONE);

    let (text, values) = clauses.render();
    assert_eq!(text, " WHERE a IS NOT NULL AND b = $1 AND c > 0 AND d < $2");
    assert_eq!(values, vec![SqlValue::Int(1), SqlValue::Decimal(Decimal::ONE)]);
}

#[test]
fn empty_where_builder_renders_nothing() {
    let clauses = WhereBuilder::new();
    assert!(clauses.is_empty());
    assert_eq!(clauses.render(), (String::new(), Vec::new()));
}
