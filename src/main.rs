use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_expense_command, handle_export_command, handle_report_command, run_menu, ExportArgs,
    ExpenseCommands, ReportCommands,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::ledger::Ledger;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense ledger for the terminal",
    long_about = "Records dated, categorized expenses in a compact binary file and \
                  reports on them by category, period or keyword."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_LEDGER_FILE")]
    data_file: Option<PathBuf>,

    /// Directory holding config.json and the default ledger file
    #[arg(long, global = true, env = "EXPENSE_LEDGER_DIR")]
    dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Export the ledger as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to config.json
        #[arg(long)]
        write: bool,
    },

    /// Run the interactive numbered menu (the default)
    Menu,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    match main_inner(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn main_inner(cli: Cli) -> Result<()> {
    let paths = match cli.dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    }
    .with_data_file(cli.data_file);
    trace!("{:?}", paths);

    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config { write }) => show_config(&paths, &settings, write)?,
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut open_ledger(&paths, &settings)?, cmd)?
        }
        Some(Commands::Report(cmd)) => handle_report_command(&open_ledger(&paths, &settings)?, cmd)?,
        Some(Commands::Export(args)) => {
            handle_export_command(&open_ledger(&paths, &settings)?, args)?
        }
        Some(Commands::Menu) | None => {
            let mut ledger = open_ledger(&paths, &settings)?;
            let stdin = io::stdin();
            run_menu(&mut ledger, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}

fn open_ledger(paths: &LedgerPaths, settings: &Settings) -> Result<Ledger> {
    let (ledger, report) = Ledger::open(paths, settings)
        .with_context(|| format!("Could not open ledger {}", paths.data_file().display()))?;
    if let Some(warning) = report.warning() {
        eprintln!("Warning: {}", warning);
    }
    Ok(ledger)
}

fn show_config(paths: &LedgerPaths, settings: &Settings, write: bool) -> Result<()> {
    if write {
        settings.save(paths)?;
        println!("Settings written to {}", paths.settings_file().display());
        println!();
    }

    let data_file = if paths.has_data_file_override() {
        paths.data_file()
    } else {
        settings
            .resolved_data_file(paths)
            .unwrap_or_else(|| paths.data_file())
    };

    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Ledger file:      {}", data_file.display());
    println!();
    println!("Settings:");
    println!("  Capacity:        {}", settings.capacity);
    println!("  Id policy:       {:?}", settings.id_policy);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Backup on save:  {}", settings.backup_on_save);

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // Only this crate's own events at the requested level
        None => EnvFilter::new(format!(
            "expense_ledger={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
