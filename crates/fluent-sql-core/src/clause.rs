//! WHERE predicates.

/// A raw WHERE predicate and the joiner it places before the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    predicate: String,
    is_or: bool,
}

impl WhereClause {
    /// Creates an AND-joined predicate.
    #[must_use]
    pub fn new(predicate: impl Into<String>) -> Self {
        Self::with_joiner(predicate, false)
    }

    /// Creates an OR-joined predicate.
    #[must_use]
    pub fn or(predicate: impl Into<String>) -> Self {
        Self::with_joiner(predicate, true)
    }

    /// Creates a predicate with an explicit joiner flag.
    #[must_use]
    pub fn with_joiner(predicate: impl Into<String>, is_or: bool) -> Self {
        Self {
            predicate: predicate.into(),
            is_or,
        }
    }

    /// Returns the predicate text.
    #[must_use]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// Returns `true` if this clause joins with OR.
    #[must_use]
    pub const fn is_or(&self) -> bool {
        self.is_or
    }

    /// Keyword written after this clause when another one follows.
    #[must_use]
    pub const fn joiner(&self) -> &'static str {
        if self.is_or {
            " OR"
        } else {
            " AND"
        }
    }
}
