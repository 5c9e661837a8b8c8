//! pocket-ledger - a personal finance ledger in a plain CSV file
//!
//! This library provides the core of the `pocket` command-line tool: a
//! transaction store with sequential ids, strict `YYYY-MM-DD` dates, and
//! load/save of a comma-delimited ledger file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Calendar dates and transactions
//! - `storage`: The transaction store and its ledger file format
//! - `reports`: Date-range income/expense reports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use pocket::models::CalendarDate;
//! use pocket::storage::TransactionStore;
//!
//! # fn main() -> pocket::LedgerResult<()> {
//! let mut store = TransactionStore::new();
//! store.load("transactions.csv")?;
//! store.add(CalendarDate::parse("2023-10-25")?, -50.0, "Food", "Lunch")?;
//! store.save("transactions.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
