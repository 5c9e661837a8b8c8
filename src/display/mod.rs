//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and reports for terminal
//! display.

pub mod report;
pub mod transaction;

pub use report::format_period_report;
pub use transaction::{format_transaction_details, format_transaction_register};
