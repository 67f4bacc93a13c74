//! FROM-clause fragments.
//!
//! A [`Fragment`] knows how to write itself into a [`SqlWriter`]. The
//! statement core stores FROM entries as [`FromSource`] handles and never
//! looks inside them, so anything implementing the trait can be placed in a
//! FROM list.

use std::fmt;
use std::sync::Arc;

use crate::statement::BuildSql;
use crate::writer::SqlWriter;

/// A piece of SQL that renders itself into a writer.
pub trait Fragment: fmt::Debug + Send + Sync {
    /// Writes this fragment's SQL at the writer's current position.
    fn write_sql(&self, out: &mut SqlWriter);

    /// Renders this fragment on its own.
    fn to_sql(&self) -> String {
        let mut out = SqlWriter::new();
        self.write_sql(&mut out);
        out.into_string()
    }
}

/// Shared handle to an immutable FROM fragment.
///
/// Cloning the handle does not copy the fragment. Two handles compare equal
/// when they render the same SQL.
#[derive(Debug, Clone)]
pub struct FromSource(Arc<dyn Fragment>);

impl FromSource {
    /// Wraps a fragment.
    #[must_use]
    pub fn new<F>(fragment: F) -> Self
    where
        F: Fragment + 'static,
    {
        Self(Arc::new(fragment))
    }

    /// Returns `true` if both handles point at the same fragment.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Fragment for FromSource {
    fn write_sql(&self, out: &mut SqlWriter) {
        self.0.write_sql(out);
    }
}

impl PartialEq for FromSource {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.to_sql() == other.to_sql()
    }
}

impl Eq for FromSource {}

impl From<&str> for FromSource {
    fn from(name: &str) -> Self {
        Self::new(Table::new(name))
    }
}

impl From<String> for FromSource {
    fn from(name: String) -> Self {
        Self::new(Table::new(name))
    }
}

impl From<Table> for FromSource {
    fn from(table: Table) -> Self {
        Self::new(table)
    }
}

impl From<Aliased> for FromSource {
    fn from(aliased: Aliased) -> Self {
        Self::new(aliased)
    }
}

impl From<Join> for FromSource {
    fn from(join: Join) -> Self {
        Self::new(join)
    }
}

impl From<Subquery> for FromSource {
    fn from(subquery: Subquery) -> Self {
        Self::new(subquery)
    }
}

/// A table referenced by name, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
}

impl Table {
    /// Creates a table reference. The name is not validated or quoted.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Fragment for Table {
    fn write_sql(&self, out: &mut SqlWriter) {
        out.push_raw(&self.name);
    }
}

/// A source followed by `AS <alias>`.
#[derive(Debug, Clone)]
pub struct Aliased {
    source: FromSource,
    alias: String,
}

impl Aliased {
    /// Attaches an alias to a source.
    #[must_use]
    pub fn new(source: impl Into<FromSource>, alias: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alias: alias.into(),
        }
    }

    /// Returns the alias.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl Fragment for Aliased {
    fn write_sql(&self, out: &mut SqlWriter) {
        self.source.write_sql(out);
        out.push_str(" AS ");
        out.push_raw(&self.alias);
    }
}

/// Kind of JOIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// `INNER JOIN`
    Inner,
    /// `LEFT JOIN`
    Left,
    /// `RIGHT JOIN`
    Right,
    /// `FULL JOIN`
    Full,
    /// `CROSS JOIN`, never carries an ON condition.
    Cross,
}

impl JoinKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// Two sources joined together: `<left> <KIND> JOIN <right>[ ON <cond>]`.
#[derive(Debug, Clone)]
pub struct Join {
    left: FromSource,
    kind: JoinKind,
    right: FromSource,
    on: Option<String>,
}

impl Join {
    /// Creates a join. The condition is dropped for [`JoinKind::Cross`].
    #[must_use]
    pub fn new(
        left: impl Into<FromSource>,
        kind: JoinKind,
        right: impl Into<FromSource>,
        on: Option<String>,
    ) -> Self {
        Self {
            left: left.into(),
            kind,
            right: right.into(),
            on: if kind == JoinKind::Cross { None } else { on },
        }
    }

    /// Returns the join kind.
    #[must_use]
    pub const fn kind(&self) -> JoinKind {
        self.kind
    }
}

impl Fragment for Join {
    fn write_sql(&self, out: &mut SqlWriter) {
        self.left.write_sql(out);
        out.push(' ');
        out.push_str(self.kind.keyword());
        out.push(' ');
        self.right.write_sql(out);
        if let Some(on) = &self.on {
            out.push_str(" ON ");
            out.push_raw(on);
        }
    }
}

/// A nested statement used as a FROM source.
///
/// The statement is rendered into the outer writer one indentation level
/// deeper than the FROM entry, so its own caller-supplied text stays as is.
#[derive(Clone)]
pub struct Subquery {
    statement: Arc<dyn BuildSql + Send + Sync>,
    alias: String,
}

impl Subquery {
    /// Wraps `statement` under `alias`.
    #[must_use]
    pub fn new<S>(statement: S, alias: impl Into<String>) -> Self
    where
        S: BuildSql + Send + Sync + 'static,
    {
        Self {
            statement: Arc::new(statement),
            alias: alias.into(),
        }
    }

    /// Returns the alias.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl fmt::Debug for Subquery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subquery")
            .field("sql", &self.statement.to_sql())
            .field("alias", &self.alias)
            .finish()
    }
}

impl Fragment for Subquery {
    fn write_sql(&self, out: &mut SqlWriter) {
        out.push('(');
        out.newline();
        out.indented(|out| {
            self.statement.build_sql(out);
            if !out.at_line_start() {
                out.newline();
            }
        });
        out.push_str(") AS ");
        out.push_raw(&self.alias);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_renders_verbatim() {
        assert_eq!(Table::new("public.users").to_sql(), "public.users");
    }

    #[test]
    fn test_str_becomes_table() {
        let source = FromSource::from("users");
        assert_eq!(source.to_sql(), "users");
    }

    #[test]
    fn test_aliased() {
        assert_eq!(Aliased::new("users", "u").to_sql(), "users AS u");
    }

    #[test]
    fn test_join_with_condition() {
        let join = Join::new(
            Aliased::new("users", "u"),
            JoinKind::Left,
            Aliased::new("orders", "o"),
            Some("u.id = o.user_id".to_owned()),
        );
        assert_eq!(
            join.to_sql(),
            "users AS u LEFT JOIN orders AS o ON u.id = o.user_id"
        );
    }

    #[test]
    fn test_cross_join_drops_condition() {
        let join = Join::new("a", JoinKind::Cross, "b", Some("a.x = b.x".to_owned()));
        assert_eq!(join.to_sql(), "a CROSS JOIN b");
        assert_eq!(join.kind(), JoinKind::Cross);
    }

    #[test]
    fn test_from_source_equality() {
        let a = FromSource::from("users");
        let b = FromSource::from(Table::new("users"));
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
        assert_ne!(a, FromSource::from("orders"));
    }

    #[test]
    fn test_nested_join() {
        let inner = Join::new("a", JoinKind::Inner, "b", Some("a.id = b.a_id".to_owned()));
        let outer = Join::new(inner, JoinKind::Full, "c", Some("b.id = c.b_id".to_owned()));
        assert_eq!(
            outer.to_sql(),
            "a INNER JOIN b ON a.id = b.a_id FULL JOIN c ON b.id = c.b_id"
        );
    }

    #[test]
    fn test_table_name_with_newline_is_verbatim() {
        let mut out = SqlWriter::new();
        out.indent();
        Table::new("\"a\nb\"").write_sql(&mut out);
        assert_eq!(out.as_str(), "    \"a\nb\"");
    }
}
