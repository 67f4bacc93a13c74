//! Clause storage and rendering shared by every statement kind.
//!
//! Statement types embed a [`Clauses`] value and implement
//! [`StatementBuilder`] to get the fluent FROM/WHERE methods for free. They
//! implement [`BuildSql`] to decide where the FROM and WHERE blocks go in the
//! full statement.

use tracing::debug;

use crate::clause::WhereClause;
use crate::error::{BuildError, Result};
use crate::fragment::{Fragment, FromSource};
use crate::writer::SqlWriter;

/// Ordered FROM sources and WHERE predicates.
///
/// Both lists only grow, except that the most recent FROM source may be
/// replaced through [`Clauses::transform_last_from`]. Cloning shares the
/// FROM fragments (they are immutable) and copies every WHERE clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clauses {
    tables: Vec<FromSource>,
    where_clauses: Vec<WhereClause>,
}

impl Clauses {
    /// Creates empty clause storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: Vec::new(),
            where_clauses: Vec::new(),
        }
    }

    /// Appends FROM sources in iteration order.
    pub fn add_from<I>(&mut self, sources: I)
    where
        I: IntoIterator,
        I::Item: Into<FromSource>,
    {
        self.tables.extend(sources.into_iter().map(Into::into));
    }

    /// Replaces the most recent FROM source with `f(last)`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidState`] if no FROM source has been added.
    /// The list is left unchanged.
    pub fn transform_last_from<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(FromSource) -> FromSource,
    {
        let Some(last) = self.tables.last_mut() else {
            debug!("rejected transform of last FROM source: FROM list is empty");
            return Err(BuildError::invalid_state(
                "cannot transform the last FROM source: no FROM source has been added",
            ));
        };
        *last = f(last.clone());
        Ok(())
    }

    /// Appends a WHERE predicate joined with OR when `use_or` is set, AND
    /// otherwise.
    pub fn add_where(&mut self, predicate: impl Into<String>, use_or: bool) {
        self.where_clauses
            .push(WhereClause::with_joiner(predicate, use_or));
    }

    /// FROM sources in insertion order.
    #[must_use]
    pub fn tables(&self) -> &[FromSource] {
        &self.tables
    }

    /// WHERE clauses in insertion order.
    #[must_use]
    pub fn where_clauses(&self) -> &[WhereClause] {
        &self.where_clauses
    }

    /// Writes the FROM block, followed by a blank line.
    ///
    /// Writes nothing when there are no FROM sources.
    pub fn render_from(&self, out: &mut SqlWriter) {
        let Some(last) = self.tables.len().checked_sub(1) else {
            return;
        };
        out.push_str("FROM");
        out.newline();
        out.indented(|out| {
            for (i, table) in self.tables.iter().enumerate() {
                table.write_sql(out);
                if i < last {
                    out.push(',');
                }
                out.newline();
            }
        });
        out.newline();
    }

    /// Writes the WHERE block.
    ///
    /// The keyword between two predicates comes from the first of the pair,
    /// so the flag on the last clause is never written. Writes nothing when
    /// there are no predicates.
    pub fn render_where(&self, out: &mut SqlWriter) {
        let Some(last) = self.where_clauses.len().checked_sub(1) else {
            return;
        };
        out.push_str("WHERE");
        out.newline();
        out.indented(|out| {
            for (i, clause) in self.where_clauses.iter().enumerate() {
                out.push_raw(clause.predicate());
                if i < last {
                    out.push_str(clause.joiner());
                }
                out.newline();
            }
        });
    }
}

/// Assembles a complete statement.
pub trait BuildSql {
    /// Writes the full statement into `out`.
    fn build_sql(&self, out: &mut SqlWriter);

    /// Renders the statement into a fresh writer and returns its text.
    fn to_sql(&self) -> String {
        let mut out = SqlWriter::new();
        self.build_sql(&mut out);
        out.into_string()
    }
}

/// Fluent FROM/WHERE methods for statements that embed [`Clauses`].
pub trait StatementBuilder: Sized {
    /// Shared clause storage.
    fn clauses(&self) -> &Clauses;

    /// Mutable access to the shared clause storage.
    fn clauses_mut(&mut self) -> &mut Clauses;

    /// Adds a FROM source. Strings become plain table references.
    #[must_use]
    fn from(mut self, source: impl Into<FromSource>) -> Self {
        self.clauses_mut().add_from([source]);
        self
    }

    /// Adds several FROM sources in order.
    #[must_use]
    fn sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FromSource>,
    {
        self.clauses_mut().add_from(sources);
        self
    }

    /// Adds a WHERE predicate followed by AND.
    #[must_use]
    fn where_clause(self, predicate: impl Into<String>) -> Self {
        self.where_with(predicate, false)
    }

    /// Adds a WHERE predicate followed by OR.
    ///
    /// The joiner is written after this predicate, so it only shows up once
    /// another predicate is added.
    #[must_use]
    fn or_where(self, predicate: impl Into<String>) -> Self {
        self.where_with(predicate, true)
    }

    /// Adds a WHERE predicate with an explicit joiner flag.
    #[must_use]
    fn where_with(mut self, predicate: impl Into<String>, use_or: bool) -> Self {
        self.clauses_mut().add_where(predicate, use_or);
        self
    }

    /// FROM sources in insertion order.
    fn tables(&self) -> &[FromSource] {
        self.clauses().tables()
    }

    /// WHERE clauses in insertion order.
    fn where_clauses(&self) -> &[WhereClause] {
        self.clauses().where_clauses()
    }
}
