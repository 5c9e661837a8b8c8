use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pocket::cli::{
    handle_report_command, handle_transaction_command, ReportArgs, TransactionCommands,
};
use pocket::config::{LedgerPaths, Settings};
use pocket::logging::init_tracing;
use pocket::storage::{LoadOutcome, TransactionStore};

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal finance ledger backed by a plain CSV file",
    long_about = "pocket keeps dated income and expense transactions in a \
                  comma-delimited text file and reports totals by category \
                  for any date range."
)]
struct Cli {
    /// Ledger file to use (defaults to the configured or standard location)
    #[arg(short, long, global = true, env = "POCKET_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Income/expense report for a date range
    Report(ReportArgs),

    /// Show current configuration and paths
    Config {
        /// Remember this ledger file as the default
        #[arg(long)]
        set_data_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    let explicit_file = cli.file;

    match cli.command {
        Commands::Transaction(cmd) => {
            let data_file = settings.resolve_data_file(&paths, explicit_file);
            let mut store = load_store(&data_file)?;
            let mutating = cmd.is_mutating();

            handle_transaction_command(&mut store, &settings, cmd)?;

            if mutating {
                store
                    .save(&data_file)
                    .with_context(|| format!("Error saving data to {}", data_file.display()))?;
            }
        }
        Commands::Report(args) => {
            let data_file = settings.resolve_data_file(&paths, explicit_file);
            let store = load_store(&data_file)?;
            handle_report_command(&store, args)?;
        }
        Commands::Config { set_data_file } => {
            if let Some(path) = set_data_file {
                settings.data_file = Some(path);
                settings.save(&paths)?;
                println!("Settings saved to {}", paths.settings_file().display());
                println!();
            }
            let data_file = settings.resolve_data_file(&paths, explicit_file);

            println!("pocket-ledger Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger file:      {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Log level:  {}", settings.log_level);
            match settings.list_limit {
                Some(limit) => println!("  List limit: {}", limit),
                None => println!("  List limit: (none)"),
            }
        }
    }

    Ok(())
}

fn load_store(path: &Path) -> Result<TransactionStore> {
    let mut store = TransactionStore::new();
    let outcome = store
        .load(path)
        .with_context(|| format!("Error loading data from {}", path.display()))?;

    if outcome == LoadOutcome::Missing {
        eprintln!(
            "Info: Data file {} not found. A new one will be created on save.",
            path.display()
        );
    }

    Ok(store)
}
