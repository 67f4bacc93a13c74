//! DELETE statement builder.

use std::fmt;

use tracing::trace;

use crate::statement::{BuildSql, Clauses, StatementBuilder};
use crate::writer::SqlWriter;

/// A DELETE statement.
///
/// Running a DELETE without predicates removes every row; the builder does
/// not guard against that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delete {
    clauses: Clauses,
}

impl Delete {
    /// Creates an empty DELETE builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clauses: Clauses::new(),
        }
    }
}

impl StatementBuilder for Delete {
    fn clauses(&self) -> &Clauses {
        &self.clauses
    }

    fn clauses_mut(&mut self) -> &mut Clauses {
        &mut self.clauses
    }
}

impl BuildSql for Delete {
    fn build_sql(&self, out: &mut SqlWriter) {
        trace!(
            kind = "delete",
            tables = self.clauses.tables().len(),
            predicates = self.clauses.where_clauses().len(),
            "rendering statement"
        );
        out.push_str("DELETE");
        out.newline();
        out.newline();
        self.clauses.render_from(out);
        self.clauses.render_where(out);
    }
}

impl fmt::Display for Delete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
