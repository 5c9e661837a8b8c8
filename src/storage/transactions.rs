//! Transaction store
//!
//! Holds the ledger's transactions in insertion order, assigns ids, and
//! loads/saves the ledger file.

use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CalendarDate, Transaction, TransactionId};

use super::file_io::{open_existing, write_atomic};
use super::ledger_file::{read_ledger, write_ledger};

/// Result of a successful `TransactionStore::load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; `count` records are now in the store
    Loaded { count: usize },
    /// The file does not exist or could not be opened; the store is empty
    Missing,
}

/// In-memory owner of all transactions and of id assignment
///
/// `next_id` is always greater than every id in `transactions`.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: TransactionId::FIRST,
        }
    }

    /// Add a transaction with the next free id and return a copy of it
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Range`, leaving the store unchanged, when the
    /// id space is exhausted.
    pub fn add(
        &mut self,
        date: CalendarDate,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> LedgerResult<Transaction> {
        let following = self.next_id.next().ok_or_else(|| {
            LedgerError::Range(format!("no transaction id left after {}", self.next_id))
        })?;

        let txn = Transaction::new(self.next_id, date, amount, category, description);
        self.next_id = following;
        self.transactions.push(txn.clone());
        debug!(transaction = %txn, "Added transaction");
        Ok(txn)
    }

    /// Replace every field but the id of the transaction with `id`
    ///
    /// Returns false, leaving the store untouched, if there is no such
    /// transaction.
    pub fn edit(
        &mut self,
        id: TransactionId,
        date: CalendarDate,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> bool {
        let Some(txn) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        txn.date = date;
        txn.amount = amount;
        txn.category = category.into();
        txn.description = description.into();
        debug!(id = %id, "Edited transaction");
        true
    }

    /// Remove every transaction with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            debug!(id = %id, "Deleted transaction");
        }
        removed
    }

    /// Get a transaction by id
    pub fn find_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions dated within `start..=end`, in insertion order
    pub fn in_range(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions
            .iter()
            .filter(move |t| t.date >= start && t.date <= end)
    }

    /// Count transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The id the next `add` will assign
    pub fn next_id(&self) -> TransactionId {
        self.next_id
    }

    /// Replace the store's contents with the ledger file at `path`
    ///
    /// A missing or unopenable file is not an error: the store is emptied
    /// and `LoadOutcome::Missing` is returned. On a parse error the store
    /// keeps its previous contents.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> LedgerResult<LoadOutcome> {
        let path = path.as_ref();

        let Some(file) = open_existing(path) else {
            info!(
                path = %path.display(),
                "Data file not found, a new one will be created on save"
            );
            self.transactions.clear();
            self.next_id = TransactionId::FIRST;
            return Ok(LoadOutcome::Missing);
        };

        let transactions = read_ledger(BufReader::new(file))?;
        let next_id = next_id_after(&transactions)?;
        let count = transactions.len();

        self.transactions = transactions;
        self.next_id = next_id;
        info!(path = %path.display(), count, "Loaded transactions");

        Ok(LoadOutcome::Loaded { count })
    }

    /// Write all transactions to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> LedgerResult<()> {
        let path = path.as_ref();
        write_atomic(path, |writer| write_ledger(writer, &self.transactions))?;
        info!(path = %path.display(), count = self.transactions.len(), "Saved transactions");
        Ok(())
    }
}

/// One past the largest id, so later additions never collide
fn next_id_after(transactions: &[Transaction]) -> LedgerResult<TransactionId> {
    match transactions.iter().map(|t| t.id).max() {
        None => Ok(TransactionId::FIRST),
        Some(max) => max.next().ok_or_else(|| {
            LedgerError::Range(format!(
                "transaction id {} leaves no id for new transactions",
                max
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn date(text: &str) -> CalendarDate {
        CalendarDate::parse(text).unwrap()
    }

    fn create_test_store() -> TransactionStore {
        let mut store = TransactionStore::new();
        store.add(date("2023-10-25"), -50.0, "Food", "Lunch").unwrap();
        store.add(date("2023-10-26"), 2000.0, "Salary", "October salary").unwrap();
        store.add(date("2023-10-27"), -15.5, "Transport", "Bus ticket").unwrap();
        store
    }

    fn ids(store: &TransactionStore) -> Vec<u64> {
        store.list().iter().map(|t| t.id.value()).collect()
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = TransactionStore::new();
        for expected in 1..=5 {
            let txn = store.add(date("2024-01-01"), 1.0, "Test", "").unwrap();
            assert_eq!(txn.id.value(), expected);
        }
        assert_eq!(ids(&store), vec![1, 2, 3, 4, 5]);
        assert_eq!(store.next_id().value(), 6);
    }

    #[test]
    fn test_add_returns_created_record() {
        let mut store = create_test_store();
        let txn = store.add(date("2023-11-01"), -100.0, "Shopping", "New shoes").unwrap();

        assert_eq!(store.len(), 4);
        let found = store.find_by_id(TransactionId::new(4)).unwrap();
        assert_eq!(found, &txn);
        assert_eq!(found.category, "Shopping");
        assert_eq!(found.amount, -100.0);
    }

    #[test]
    fn test_delete() {
        let mut store = create_test_store();
        let id = TransactionId::new(1);

        assert!(store.find_by_id(id).is_some());
        assert!(store.delete(id));
        assert_eq!(store.len(), 2);
        assert!(store.find_by_id(id).is_none());
        assert_eq!(ids(&store), vec![2, 3]);
    }

    #[test]
    fn test_delete_missing_leaves_store_unchanged() {
        let mut store = create_test_store();
        let before = store.list().to_vec();

        assert!(!store.delete(TransactionId::new(999)));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = create_test_store();
        store.delete(TransactionId::new(3));
        let txn = store.add(date("2023-11-01"), 1.0, "Test", "").unwrap();
        assert_eq!(txn.id.value(), 4);
    }

    #[test]
    fn test_delete_down_to_empty() {
        let mut store = create_test_store();
        for id in 1..=3 {
            assert!(store.delete(TransactionId::new(id)));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_preserves_id_and_position() {
        let mut store = create_test_store();
        let id = TransactionId::new(2);

        assert!(store.edit(id, date("2023-10-28"), -20.0, "Transport", "Metro"));

        assert_eq!(ids(&store), vec![1, 2, 3]);
        let edited = store.find_by_id(id).unwrap();
        assert_eq!(edited.date, date("2023-10-28"));
        assert_eq!(edited.amount, -20.0);
        assert_eq!(edited.category, "Transport");
        assert_eq!(edited.description, "Metro");

        let untouched = store.find_by_id(TransactionId::new(1)).unwrap();
        assert_eq!(untouched.description, "Lunch");
        assert_eq!(store.next_id().value(), 4);
    }

    #[test]
    fn test_edit_missing_returns_false() {
        let mut store = create_test_store();
        let before = store.list().to_vec();

        assert!(!store.edit(TransactionId::new(999), date("2000-01-01"), 0.0, "", ""));
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.next_id().value(), 4);
    }

    #[test]
    fn test_find_by_id() {
        let store = create_test_store();
        assert_eq!(
            store.find_by_id(TransactionId::new(2)).unwrap().category,
            "Salary"
        );
        assert!(store.find_by_id(TransactionId::new(999)).is_none());
    }

    #[test]
    fn test_in_range_is_inclusive() {
        let store = create_test_store();
        let found: Vec<u64> = store
            .in_range(date("2023-10-26"), date("2023-10-27"))
            .map(|t| t.id.value())
            .collect();
        assert_eq!(found, vec![2, 3]);

        assert_eq!(store.in_range(date("2023-10-27"), date("2023-10-26")).count(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_data.csv");

        let store1 = create_test_store();
        store1.save(&path).unwrap();

        let mut store2 = TransactionStore::new();
        let outcome = store2.load(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { count: 3 });
        assert_eq!(store1.list(), store2.list());

        let txn = store2.add(date("2024-01-01"), 1.0, "Test", "").unwrap();
        assert_eq!(txn.id.value(), 4);
        assert!(store2.find_by_id(TransactionId::new(4)).is_some());
    }

    #[test]
    fn test_load_recomputes_next_id_from_max() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(
            &path,
            "ID,Date,Amount,Category,Description\n\
             7,2023-01-01,1,A,\n\
             3,2023-01-02,2,B,\n",
        )
        .unwrap();

        let mut store = TransactionStore::new();
        store.load(&path).unwrap();
        assert_eq!(ids(&store), vec![7, 3]);
        assert_eq!(store.next_id().value(), 8);
    }

    #[test]
    fn test_load_header_only_resets_next_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(&path, "ID,Date,Amount,Category,Description\n").unwrap();

        let mut store = create_test_store();
        assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded { count: 0 });
        assert!(store.is_empty());
        assert_eq!(store.next_id(), TransactionId::FIRST);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TransactionStore::new();

        let outcome = store
            .load(temp_dir.path().join("nonexistent.csv"))
            .unwrap();
        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_load_missing_file_clears_existing_records() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = create_test_store();

        store.load(temp_dir.path().join("nonexistent.csv")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), TransactionId::FIRST);
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_data.csv");
        fs::write(
            &path,
            "ID,Date,Amount,Category,Description\n1,2023-10-10,100,Food\n",
        )
        .unwrap();

        let mut store = TransactionStore::new();
        let err = store.load(&path).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_failed_load_keeps_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(
            &path,
            "ID,Date,Amount,Category,Description\n\
             10,2023-01-01,1,A,ok\n\
             11,2023-02-30,2,B,ok\n\
             12,2023-01-01,oops,C,bad\n",
        )
        .unwrap();

        let mut store = create_test_store();
        let before = store.list().to_vec();

        assert!(store.load(&path).unwrap_err().is_format());
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.next_id().value(), 4);
    }

    #[test]
    fn test_load_rejects_largest_possible_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(
            &path,
            "ID,Date,Amount,Category,Description\n\
             18446744073709551615,2023-10-25,-50,Food,Lunch\n",
        )
        .unwrap();

        let mut store = create_test_store();
        let before = store.list().to_vec();

        assert!(store.load(&path).unwrap_err().is_range());
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.next_id().value(), 4);
    }

    #[test]
    fn test_add_fails_when_ids_are_exhausted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(
            &path,
            format!("h\n{},2023-10-25,-50,Food,Lunch\n", u64::MAX - 1),
        )
        .unwrap();

        let mut store = TransactionStore::new();
        store.load(&path).unwrap();
        assert_eq!(store.next_id().value(), u64::MAX);

        let err = store.add(date("2023-10-26"), 1.0, "Test", "").unwrap_err();
        assert!(err.is_range());
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id().value(), u64::MAX);
    }

    #[test]
    fn test_load_blank_first_line_keeps_every_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(
            &path,
            "\n1,2023-10-25,-50,Food,Lunch\n2,2023-10-26,2000,Salary,Pay\n",
        )
        .unwrap();

        let mut store = TransactionStore::new();
        assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded { count: 2 });
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.next_id().value(), 3);
    }

    #[test]
    fn test_load_directory_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = create_test_store();

        assert_eq!(store.load(temp_dir.path()).unwrap(), LoadOutcome::Missing);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_overwrites_and_reports_io_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        create_test_store().save(&path).unwrap();
        TransactionStore::new().save(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "ID,Date,Amount,Category,Description\n"
        );

        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let err = create_test_store().save(blocker.join("data.csv")).unwrap_err();
        assert!(err.is_io());
    }
}
