//! # fluent-sql-core
//!
//! Fluent SQL statement builder with deterministic, indented text rendering.
//!
//! This crate provides:
//! - Ordered FROM and WHERE clause storage shared by every statement kind
//! - Pluggable FROM sources through the [`Fragment`] trait
//! - An indentation-aware [`SqlWriter`] that all rendering goes through
//!
//! Predicates and table names are taken as raw SQL text. Nothing is parsed,
//! quoted or escaped.
//!
//! ## Building a statement
//!
//! ```rust
//! use fluent_sql_core::{BuildSql, Select, StatementBuilder};
//!
//! # fn main() -> fluent_sql_core::Result<()> {
//! let sql = Select::new()
//!     .columns(["u.id", "o.total"])
//!     .from("users")
//!     .alias("u")?
//!     .left_join("orders o", "o.user_id = u.id")?
//!     .where_clause("u.active = 1")
//!     .or_where("u.admin = 1")
//!     .where_clause("o.total > 0")
//!     .to_sql();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT\n    u.id,\n    o.total\n\n\
//!      FROM\n    users AS u LEFT JOIN orders o ON o.user_id = u.id\n\n\
//!      WHERE\n    u.active = 1 AND\n    u.admin = 1 OR\n    o.total > 0\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Joiners
//!
//! The keyword written between two predicates belongs to the first one of the
//! pair. In the example above `u.admin = 1` was added with
//! [`StatementBuilder::or_where`], so `OR` follows it and separates it from
//! `o.total > 0`. The flag of the last predicate is never written. See
//! [`Clauses::render_where`].

pub mod clause;
pub mod delete;
pub mod error;
pub mod fragment;
pub mod select;
pub mod statement;
pub mod writer;

pub use clause::WhereClause;
pub use delete::Delete;
pub use error::{BuildError, Result};
pub use fragment::{Aliased, Fragment, FromSource, Join, JoinKind, Subquery, Table};
pub use select::Select;
pub use statement::{BuildSql, Clauses, StatementBuilder};
pub use writer::{SqlWriter, INDENT};
