//! Monthly revenue report - statement reuse example
//!
//! Builds one base query, clones it into two variants and prints the SQL of
//! each, with statement rendering traced to stderr.
//!
//! Run with: cargo run --example report_query

use fluent_sql_core::{BuildSql, Delete, Select, StatementBuilder};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let base = Select::new()
        .columns(["c.name", "SUM(i.amount) AS revenue"])
        .from("invoices")
        .alias("i")?
        .inner_join("clients c", "c.id = i.client_id")?
        .where_clause("i.status = 'paid'")
        .group_by(["c.name"]);

    let this_month = base
        .clone()
        .where_clause("i.paid_at >= date_trunc('month', now())")
        .order_by_desc("revenue");

    let top_five = Select::new()
        .from(this_month.to_subquery("m"))
        .limit(5);

    println!("-- base\n{base}");
    println!("-- this month\n{this_month}");
    println!("-- top five\n{}", top_five.to_sql());

    let cleanup = Delete::new()
        .from("invoices")
        .or_where("status = 'void'")
        .where_clause("created_at < now() - interval '7 years'");
    println!("-- cleanup\n{cleanup}");

    // No FROM source yet: rejected, and logged at debug level.
    if let Err(err) = Select::new().alias("x") {
        println!("-- expected error: {err}");
    }

    Ok(())
}
