//! Typed builder for the `WHERE` clause of the user listing query.
//!
//! Only the presence of a predicate changes the statement text. Caller-supplied values always
//! travel as bound parameters.

use sqlx::{Postgres, QueryBuilder};
use thiserror::Error;

/// Reasons a filter could not be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum FilterError {
    #[error("invalid status {0:?}, expected a boolean")]
    InvalidStatus(String),
}

/// A single condition on the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Predicate {
    /// `name` contains the text anywhere.
    NameContains(String),
    StatusEquals(bool),
}

/// Ordered set of predicates, joined with `AND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UserFilter {
    predicates: Vec<Predicate>,
}

impl UserFilter {
    /// Build a filter from raw query values. Empty strings mean "no condition".
    ///
    /// The name predicate, when present, always precedes the status predicate.
    pub(crate) fn parse(name: &str, status: &str) -> Result<Self, FilterError> {
        let mut filter = Self::default();
        if !name.is_empty() {
            filter = filter.name_contains(name);
        }
        if !status.is_empty() {
            let status =
                parse_bool(status).ok_or_else(|| FilterError::InvalidStatus(status.to_owned()))?;
            filter = filter.status(status);
        }
        Ok(filter)
    }

    pub(crate) fn name_contains(mut self, name: impl Into<String>) -> Self {
        self.predicates.push(Predicate::NameContains(name.into()));
        self
    }

    pub(crate) fn status(mut self, status: bool) -> Self {
        self.predicates.push(Predicate::StatusEquals(status));
        self
    }

    #[cfg(test)]
    pub(crate) fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Append the `WHERE` clause to `builder`, binding one parameter per predicate.
    pub(crate) fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(" WHERE 1=1");
        for predicate in &self.predicates {
            match predicate {
                Predicate::NameContains(name) => {
                    builder.push(" AND name LIKE ");
                    builder.push_bind(like_pattern(name));
                }
                Predicate::StatusEquals(status) => {
                    builder.push(" AND status = ");
                    builder.push_bind(*status);
                }
            }
        }
    }
}

/// Accepts `1`/`0`, `t`/`f` and `true`/`false` in lower, upper or title case.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Wrap `text` for a substring `LIKE`, escaping the wildcard characters it contains.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(filter: &UserFilter) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id, name, status FROM users");
        filter.push_where(&mut builder);
        builder.sql().to_owned()
    }

    #[test]
    fn empty_filter_selects_everything() {
        let filter = UserFilter::parse("", "").unwrap();
        assert!(filter.predicates().is_empty());
        assert_eq!(
            render(&filter),
            "SELECT id, name, status FROM users WHERE 1=1"
        );
    }

    #[test]
    fn name_comes_before_status() {
        let filter = UserFilter::parse("ale", "true").unwrap();
        assert_eq!(
            filter.predicates(),
            &[
                Predicate::NameContains("ale".into()),
                Predicate::StatusEquals(true)
            ]
        );
        assert_eq!(
            render(&filter),
            "SELECT id, name, status FROM users WHERE 1=1 AND name LIKE $1 AND status = $2"
        );
    }

    #[test]
    fn status_alone_takes_first_placeholder() {
        let filter = UserFilter::parse("", "F").unwrap();
        assert_eq!(filter.predicates(), &[Predicate::StatusEquals(false)]);
        assert_eq!(
            render(&filter),
            "SELECT id, name, status FROM users WHERE 1=1 AND status = $1"
        );
    }

    #[test]
    fn caller_text_never_reaches_the_statement() {
        let filter = UserFilter::parse("x' OR '1'='1", "").unwrap();
        let sql = render(&filter);
        assert!(!sql.contains("OR '1'"));
        assert!(sql.ends_with("name LIKE $1"));
    }

    #[test]
    fn rejects_non_boolean_status() {
        assert_eq!(
            UserFilter::parse("alex", "notaboolean"),
            Err(FilterError::InvalidStatus("notaboolean".into()))
        );
        assert!(UserFilter::parse("", "yes").is_err());
    }

    #[test]
    fn parses_go_style_booleans() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Some(true), "{value}");
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Some(false), "{value}");
        }
        assert_eq!(parse_bool("tRuE"), None);
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ale"), "%ale%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
