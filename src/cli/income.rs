//! Income CLI commands
//!
//! Implements CLI commands for setting and showing the income figure.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::messages;
use crate::error::BudgetResult;
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the income figure
    Set {
        /// Income amount (e.g., "5000" or "5000.00"); non-numeric input sets 0
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show income, total expenses and balance
    Show,
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        IncomeCommands::Set { amount } => {
            let income = store.set_income_from_input(&amount)?;
            println!("{}", messages::income_set(income, symbol));

            if store.is_over_budget() {
                println!("Warning: {}", messages::OVER_BUDGET);
            }
        }

        IncomeCommands::Show => {
            println!("Income:          {}", store.income().format_with_symbol(symbol));
            println!(
                "Total Expenses:  {}",
                store.total_expenses().format_with_symbol(symbol)
            );
            println!(
                "Balance:         {}",
                store.balance().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
