//! SELECT statement builder.

use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::fragment::{Aliased, FromSource, Join, JoinKind, Subquery};
use crate::statement::{BuildSql, Clauses, StatementBuilder};
use crate::writer::SqlWriter;

/// A SELECT statement.
///
/// ```rust
/// use fluent_sql_core::{BuildSql, Select, StatementBuilder};
///
/// let sql = Select::new()
///     .columns(["id", "name"])
///     .from("users")
///     .where_clause("active = 1")
///     .to_sql();
///
/// assert_eq!(
///     sql,
///     "SELECT\n    id,\n    name\n\nFROM\n    users\n\nWHERE\n    active = 1\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Select {
    clauses: Clauses,
    distinct: bool,
    columns: Vec<String>,
    group_by: Vec<String>,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    /// Creates an empty SELECT builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clauses: Clauses::new(),
            distinct: false,
            columns: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Adds columns to the projection. With no columns the projection is `*`.
    #[must_use]
    pub fn columns<I>(mut self, cols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns.extend(cols.into_iter().map(Into::into));
        self
    }

    /// Adds a single column to the projection.
    #[must_use]
    pub fn column(mut self, col: impl Into<String>) -> Self {
        self.columns.push(col.into());
        self
    }

    /// Sets DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Attaches an alias to the most recent FROM source.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidState`](crate::BuildError::InvalidState)
    /// if no FROM source has been added.
    pub fn alias(mut self, alias: impl Into<String>) -> Result<Self> {
        let alias = alias.into();
        self.clauses
            .transform_last_from(|last| Aliased::new(last, alias).into())?;
        Ok(self)
    }

    /// Joins `source` onto the most recent FROM source.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidState`](crate::BuildError::InvalidState)
    /// if no FROM source has been added.
    pub fn join(
        mut self,
        kind: JoinKind,
        source: impl Into<FromSource>,
        on: Option<&str>,
    ) -> Result<Self> {
        let right = source.into();
        let on = on.map(str::to_owned);
        self.clauses
            .transform_last_from(|last| Join::new(last, kind, right, on).into())?;
        Ok(self)
    }

    /// Adds an INNER JOIN to the most recent FROM source.
    ///
    /// # Errors
    ///
    /// Fails like [`Select::join`].
    pub fn inner_join(self, source: impl Into<FromSource>, on: &str) -> Result<Self> {
        self.join(JoinKind::Inner, source, Some(on))
    }

    /// Adds a LEFT JOIN to the most recent FROM source.
    ///
    /// # Errors
    ///
    /// Fails like [`Select::join`].
    pub fn left_join(self, source: impl Into<FromSource>, on: &str) -> Result<Self> {
        self.join(JoinKind::Left, source, Some(on))
    }

    /// Adds a CROSS JOIN to the most recent FROM source.
    ///
    /// # Errors
    ///
    /// Fails like [`Select::join`].
    pub fn cross_join(self, source: impl Into<FromSource>) -> Result<Self> {
        self.join(JoinKind::Cross, source, None)
    }

    /// Adds GROUP BY columns.
    #[must_use]
    pub fn group_by<I>(mut self, cols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.group_by.extend(cols.into_iter().map(Into::into));
        self
    }

    /// Adds an ascending ORDER BY column.
    #[must_use]
    pub fn order_by(mut self, col: impl Into<String>) -> Self {
        self.order_by.push(col.into());
        self
    }

    /// Adds a descending ORDER BY column.
    #[must_use]
    pub fn order_by_desc(mut self, col: impl Into<String>) -> Self {
        self.order_by.push(format!("{} DESC", col.into()));
        self
    }

    /// Sets LIMIT.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets OFFSET.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Wraps a copy of this statement as a FROM source named `alias`.
    #[must_use]
    pub fn to_subquery(&self, alias: impl Into<String>) -> Subquery {
        Subquery::new(self.clone(), alias)
    }

    fn render_columns(&self, out: &mut SqlWriter) {
        out.push_str(if self.distinct { "SELECT DISTINCT" } else { "SELECT" });
        out.newline();
        out.indented(|out| {
            if self.columns.is_empty() {
                out.push('*');
                out.newline();
                return;
            }
            let last = self.columns.len() - 1;
            for (i, col) in self.columns.iter().enumerate() {
                out.push_raw(col);
                if i < last {
                    out.push(',');
                }
                out.newline();
            }
        });
        out.newline();
    }
}

impl StatementBuilder for Select {
    fn clauses(&self) -> &Clauses {
        &self.clauses
    }

    fn clauses_mut(&mut self) -> &mut Clauses {
        &mut self.clauses
    }
}

impl BuildSql for Select {
    fn build_sql(&self, out: &mut SqlWriter) {
        trace!(
            kind = "select",
            tables = self.clauses.tables().len(),
            predicates = self.clauses.where_clauses().len(),
            "rendering statement"
        );
        self.render_columns(out);
        self.clauses.render_from(out);
        self.clauses.render_where(out);

        if !self.group_by.is_empty() {
            out.push_str("GROUP BY ");
            out.push_raw(&self.group_by.join(", "));
            out.newline();
        }
        if !self.order_by.is_empty() {
            out.push_str("ORDER BY ");
            out.push_raw(&self.order_by.join(", "));
            out.newline();
        }
        if let Some(n) = self.limit {
            out.push_str(&format!("LIMIT {n}"));
            out.newline();
        }
        if let Some(n) = self.offset {
            out.push_str(&format!("OFFSET {n}"));
            out.newline();
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::BuildError;
    use crate::fragment::Fragment;

    #[test]
    fn test_select_all() {
        let sql = Select::new().from("users").to_sql();
        assert_eq!(sql, "SELECT\n    *\n\nFROM\n    users\n\n");
    }

    #[test]
    fn test_select_distinct_columns() {
        let sql = Select::new()
            .columns(["status"])
            .distinct()
            .from("orders")
            .to_sql();
        assert_eq!(sql, "SELECT DISTINCT\n    status\n\nFROM\n    orders\n\n");
    }

    #[test]
    fn test_select_without_from() {
        let sql = Select::new().column("1").to_sql();
        assert_eq!(sql, "SELECT\n    1\n\n");
    }

    #[test]
    fn test_select_with_alias() {
        let sql = Select::new()
            .columns(["u.id"])
            .from("users")
            .alias("u")
            .unwrap()
            .to_sql();
        assert_eq!(sql, "SELECT\n    u.id\n\nFROM\n    users AS u\n\n");
    }

    #[test]
    fn test_alias_without_from_fails() {
        let err = Select::new().alias("u").unwrap_err();
        assert!(matches!(err, BuildError::InvalidState(_)));
    }

    #[test]
    fn test_join_decorates_last_source() {
        let select = Select::new()
            .sources(["accounts", "users"])
            .alias("u")
            .unwrap()
            .left_join("orders o", "u.id = o.user_id")
            .unwrap();
        assert_eq!(select.tables().len(), 2);
        assert_eq!(select.tables()[0].to_sql(), "accounts");
        assert_eq!(
            select.tables()[1].to_sql(),
            "users AS u LEFT JOIN orders o ON u.id = o.user_id"
        );
    }

    #[test]
    fn test_cross_join() {
        let select = Select::new().from("a").cross_join("b").unwrap();
        assert_eq!(select.tables()[0].to_sql(), "a CROSS JOIN b");
    }

    #[test]
    fn test_trailing_clauses() {
        let sql = Select::new()
            .columns(["status", "COUNT(*)"])
            .from("orders")
            .group_by(["status"])
            .order_by("status")
            .order_by_desc("COUNT(*)")
            .limit(10)
            .offset(20)
            .to_sql();
        assert_eq!(
            sql,
            "SELECT\n    status,\n    COUNT(*)\n\nFROM\n    orders\n\n\
             GROUP BY status\nORDER BY status, COUNT(*) DESC\nLIMIT 10\nOFFSET 20\n"
        );
    }

    #[test]
    fn test_display_matches_to_sql() {
        let select = Select::new()
            .from("users")
            .where_clause("a = 1")
            .or_where("b = 2")
            .where_clause("c = 3");
        let mut out = SqlWriter::new();
        select.build_sql(&mut out);
        assert_eq!(select.to_string(), out.into_string());
        assert_eq!(select.to_string(), select.to_sql());
    }

    #[test]
    fn test_subquery_source() {
        let inner = Select::new()
            .columns(["user_id"])
            .from("orders")
            .where_clause("total > 100");
        let sql = Select::new()
            .from(inner.to_subquery("big"))
            .to_sql();
        assert_eq!(
            sql,
            "SELECT\n    *\n\nFROM\n    (\n        SELECT\n            user_id\n\n        \
             FROM\n            orders\n\n        WHERE\n            total > 100\n    ) AS big\n\n"
        );
    }

    #[test]
    fn test_multiline_column_expression_is_verbatim() {
        let sql = Select::new()
            .column("CASE\n  WHEN a THEN 1\nEND AS flag")
            .from("t")
            .to_sql();
        assert_eq!(
            sql,
            "SELECT\n    CASE\n  WHEN a THEN 1\nEND AS flag\n\nFROM\n    t\n\n"
        );
    }

    #[test]
    fn test_subquery_keeps_inner_literals_verbatim() {
        let inner = Select::new()
            .from("notes")
            .where_clause("body = 'a\nb'");
        let sql = Select::new().from(inner.to_subquery("n")).to_sql();
        assert_eq!(
            sql,
            "SELECT\n    *\n\nFROM\n    (\n        SELECT\n            *\n\n        \
             FROM\n            notes\n\n        WHERE\n            body = 'a\nb'\n    ) AS n\n\n"
        );
    }
}
