//! Period Report
//!
//! Income and expense totals for an inclusive date range, with expenses
//! broken down by category.

use std::collections::BTreeMap;

use crate::models::CalendarDate;
use crate::storage::TransactionStore;

/// Income/expense summary for a date range
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodReport {
    /// First day of the report (inclusive)
    pub start_date: CalendarDate,
    /// Last day of the report (inclusive)
    pub end_date: CalendarDate,
    /// Sum of positive amounts
    pub total_income: f64,
    /// Sum of negative amounts (zero or negative)
    pub total_expense: f64,
    /// Negative amounts summed per category, ordered by category name
    pub expenses_by_category: BTreeMap<String, f64>,
    /// Number of transactions inside the range
    pub transaction_count: usize,
}

impl PeriodReport {
    /// Generate a report from the store's transactions dated within
    /// `start..=end`
    pub fn generate(
        store: &TransactionStore,
        start_date: CalendarDate,
        end_date: CalendarDate,
    ) -> Self {
        let mut report = Self {
            start_date,
            end_date,
            total_income: 0.0,
            total_expense: 0.0,
            expenses_by_category: BTreeMap::new(),
            transaction_count: 0,
        };

        for txn in store.in_range(start_date, end_date) {
            report.transaction_count += 1;

            if txn.is_income() {
                report.total_income += txn.amount;
            } else if txn.is_expense() {
                report.total_expense += txn.amount;
                *report
                    .expenses_by_category
                    .entry(txn.category.clone())
                    .or_insert(0.0) += txn.amount;
            }
        }

        report
    }

    /// Income plus (negative) expense
    pub fn net_balance(&self) -> f64 {
        self.total_income + self.total_expense
    }

    /// Categories ordered by spending, largest expense first
    pub fn top_expenses(&self) -> Vec<(&str, f64)> {
        let mut rows: Vec<(&str, f64)> = self
            .expenses_by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| a.1.total_cmp(&b.1));
        rows
    }
}
