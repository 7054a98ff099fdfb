//! Job search query assembly.

use crate::models::JobFilter;
use crate::sql::SqlValue;

const SEARCH_BASE: &str = "SELECT j.id, j.title, j.salary, j.equity, j.company_handle, \
     c.name AS company_name \
     FROM jobs j JOIN companies AS c ON c.handle = j.company_handle";

const SEARCH_ORDER: &str = " ORDER BY j.title";

/// A complete query and its bind values, `values[0]` being `$1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub values: Vec<SqlValue>,
}

/// Collects optional `AND`-ed predicates and numbers their placeholders
/// only when rendered, so skipped filters never leave gaps.
#[derive(Debug, Default)]
pub struct WhereBuilder {
    predicates: Vec<(&'static str, Option<SqlValue>)>,
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `"{expr} $N"`, binding `value` to the next placeholder.
    pub fn bind(&mut self, expr: &'static str, value: impl Into<SqlValue>) -> &mut Self {
        self.predicates.push((expr, Some(value.into())));
        self
    }

    /// Add a predicate that takes no parameter.
    pub fn raw(&mut self, predicate: &'static str) -> &mut Self {
        self.predicates.push((predicate, None));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Render as `" WHERE a AND b"` (or `""` when empty) plus values.
    pub fn render(self) -> (String, Vec<SqlValue>) {
        if self.predicates.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut parts = Vec::with_capacity(self.predicates.len());
        let mut values = Vec::new();
        for (text, value) in self.predicates {
            match value {
                Some(value) => {
                    values.push(value);
                    parts.push(format!("{text} ${}", values.len()));
                }
                None => parts.push(text.to_owned()),
            }
        }

        (format!(" WHERE {}", parts.join(" AND ")), values)
    }
}

/// Build the job search query for `filter`.
///
/// Predicates are added in the order title, minimum salary, equity. An
/// empty title is treated as absent; a minimum salary of zero is not.
pub fn build_search_query(filter: &JobFilter) -> SearchQuery {
    let mut clauses = WhereBuilder::new();

    if let Some(title) = filter.title.as_deref().filter(|t| !t.is_empty()) {
        clauses.bind("j.title ILIKE", format!("%{title}%"));
    }
    if let Some(min_salary) = filter.min_salary {
        clauses.bind("j.salary >=", min_salary);
    }
    if filter.has_equity {
        clauses.raw("j.equity > 0");
    }

    let (where_clause, values) = clauses.render();
    SearchQuery {
        query: format!("{SEARCH_BASE}{where_clause}{SEARCH_ORDER}"),
        values,
    }
}
