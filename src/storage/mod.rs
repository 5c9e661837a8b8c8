//! Storage layer for pocket-ledger
//!
//! Provides the in-memory transaction store and its comma-delimited ledger
//! file, written atomically.

pub mod file_io;
pub mod ledger_file;
pub mod transactions;

pub use file_io::write_atomic;
pub use ledger_file::{read_ledger, write_ledger, HEADER};
pub use transactions::{LoadOutcome, TransactionStore};
