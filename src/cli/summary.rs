//! Summary and history CLI commands

use std::io::IsTerminal;

use crate::audit::AuditLogger;
use crate::config::settings::Settings;
use crate::display::{format_category_summary, format_overview};
use crate::error::BudgetResult;
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

/// Print the budget overview followed by the category summary
pub fn handle_summary_command<S: KeyValueStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    let snapshot = store.snapshot();
    let color = std::io::stdout().is_terminal();

    println!("Budget Summary");
    println!("{}", "=".repeat(40));
    print!(
        "{}",
        format_overview(&snapshot, &settings.currency_symbol, color)
    );
    println!();
    println!("Spending by Category");
    println!("{}", "-".repeat(40));
    print!(
        "{}",
        format_category_summary(&snapshot.category_totals, &settings.currency_symbol)
    );

    Ok(())
}

/// Print the most recent audit log entries, oldest first
pub fn handle_history_command(
    logger: &AuditLogger,
    settings: &Settings,
    limit: usize,
) -> BudgetResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.describe(&settings.currency_symbol));
    }

    Ok(())
}
