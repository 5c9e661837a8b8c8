//! Reports module for pocket-ledger
//!
//! Provides date-range income/expense reports built from the store's
//! transaction list.

pub mod period;

pub use period::PeriodReport;
