//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the transaction store.

pub mod report;
pub mod transaction;

pub use report::{handle_report_command, ReportArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};
