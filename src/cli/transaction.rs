//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CalendarDate, Transaction, TransactionId};
use crate::storage::TransactionStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (positive for income, negative for expense, e.g. "-12.50")
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<CalendarDate>,
        /// Description
        #[arg(short = 'D', long, default_value = "")]
        description: String,
    },
    /// List transactions
    #[command(alias = "ls")]
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<CalendarDate>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<CalendarDate>,
        /// Only show this category
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: TransactionId,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: TransactionId,
        /// New date
        #[arg(short, long)]
        date: Option<CalendarDate>,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
}

impl TransactionCommands {
    /// Whether the command changes the store and must be saved afterwards
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Add { .. } | Self::Edit { .. } | Self::Delete { .. })
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut TransactionStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = check_amount(amount)?;
            let date = date.unwrap_or_else(CalendarDate::today);

            let txn = store.add(date, amount, category, description)?;

            println!("Transaction added successfully.");
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::List {
            from,
            to,
            category,
            limit,
            json,
        } => {
            let limit = limit.or(settings.list_limit).unwrap_or(usize::MAX);

            let from = from.unwrap_or(CalendarDate::MIN);
            let to = to.unwrap_or(CalendarDate::MAX);

            let transactions: Vec<&Transaction> = store
                .in_range(from, to)
                .filter(|t| category.as_deref().map_or(true, |c| t.category == c))
                .take(limit)
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&transactions)?);
            } else {
                print!("{}", format_transaction_register(transactions.iter().copied()));
                println!("\nShowing {} of {} transactions", transactions.len(), store.len());
            }
        }

        TransactionCommands::Show { id } => {
            let txn = store
                .find_by_id(id)
                .ok_or_else(|| LedgerError::transaction_not_found(id))?;

            print!("{}", format_transaction_details(txn));
        }

        TransactionCommands::Edit {
            id,
            date,
            amount,
            category,
            description,
        } => {
            let current = store
                .find_by_id(id)
                .ok_or_else(|| LedgerError::transaction_not_found(id))?
                .clone();

            let amount = match amount {
                Some(amount) => check_amount(amount)?,
                None => current.amount,
            };

            store.edit(
                id,
                date.unwrap_or(current.date),
                amount,
                category.unwrap_or(current.category),
                description.unwrap_or(current.description),
            );

            println!("Transaction updated successfully.");
            if let Some(updated) = store.find_by_id(id) {
                print!("{}", format_transaction_details(updated));
            }
        }

        TransactionCommands::Delete { id } => {
            if !store.delete(id) {
                return Err(LedgerError::transaction_not_found(id));
            }
            println!("Transaction {} deleted successfully.", id);
        }
    }

    Ok(())
}

fn check_amount(amount: f64) -> LedgerResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(LedgerError::Validation(format!(
            "Invalid amount '{}', expected a finite number like -50.00 or 100",
            amount
        )))
    }
}
