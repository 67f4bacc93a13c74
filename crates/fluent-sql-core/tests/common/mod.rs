#![allow(dead_code)]

use fluent_sql_core::{BuildSql, SqlWriter};

/// Joins expected output lines, each terminated by a newline.
pub fn lines(lines: &[&str]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Renders a statement through an explicit writer instead of `to_sql`.
pub fn build<S: BuildSql>(statement: &S) -> String {
    let mut out = SqlWriter::new();
    statement.build_sql(&mut out);
    out.into_string()
}
