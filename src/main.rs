use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::audit::AuditLogger;
use budget_tracker::cli::{
    handle_history_command, handle_income_command, handle_summary_command,
    handle_transaction_command, IncomeCommands, TransactionCommands,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::services::BudgetStore;
use budget_tracker::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker for the terminal",
    long_about = "Budget Tracker records your income and your expenses, shows \
                  the remaining balance, and warns you when spending goes over \
                  budget. Use the subcommands for scripting or launch the \
                  interactive interface with 'budget tui'."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Transaction (expense) commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show the budget overview and spending by category
    Summary,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        None => {
            println!("Budget Tracker - track income, expenses and balance");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget tui' to launch the interactive interface.");
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Storage file:   {}", paths.storage_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!(
                "  Notification duration: {} ms",
                settings.notification_duration_ms
            );
            println!("  Audit log enabled:     {}", settings.audit_enabled);
            return Ok(());
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit, &settings, limit)?;
            return Ok(());
        }
        _ => {}
    }

    let backend = JsonFileStore::open(paths.storage_file())?;
    let mut store = BudgetStore::load(backend);
    if settings.audit_enabled {
        store = store.with_audit(audit);
    }

    match cli.command {
        Some(Commands::Tui) => budget_tracker::tui::run_tui(store, settings)?,
        Some(Commands::Income(cmd)) => handle_income_command(&mut store, &settings, cmd)?,
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut store, &settings, cmd)?
        }
        Some(Commands::Summary) => handle_summary_command(&store, &settings)?,
        _ => {}
    }

    Ok(())
}
