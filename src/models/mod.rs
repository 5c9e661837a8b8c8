//! Core data models for pocket-ledger
//!
//! This module contains the data structures of the ledger domain: calendar
//! dates, transaction ids and transactions.

pub mod date;
pub mod ids;
pub mod transaction;

pub use date::CalendarDate;
pub use ids::TransactionId;
pub use transaction::Transaction;
