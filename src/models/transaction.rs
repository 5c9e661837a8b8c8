//! Transaction model
//!
//! One dated monetary movement with category and description metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::CalendarDate;
use super::ids::TransactionId;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: TransactionId,

    /// Transaction date
    pub date: CalendarDate,

    /// Amount (positive for income, negative for expense)
    pub amount: f64,

    /// Free-form category, may be empty
    #[serde(default)]
    pub category: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a transaction with all fields
    pub fn new(
        id: TransactionId,
        date: CalendarDate,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id, self.date, self.category, self.amount
        )
    }
}
