//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::Transaction;

use super::report::truncate;

const REGISTER_WIDTH: usize = 72;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{:>5}  {:10}  {:>12.2}  {:15}  {}",
        txn.id,
        txn.date.to_string(),
        txn.amount,
        truncate(&txn.category, 15),
        truncate(&txn.description, 30)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register<'a, I>(transactions: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut rows = transactions.into_iter().peekable();
    if rows.peek().is_none() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:10}  {:>12}  {:15}  {}\n",
        "ID", "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');

    for txn in rows {
        output.push_str(format_transaction_row(txn).trim_end());
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Amount:      {}\n", txn.amount));

    if txn.category.is_empty() {
        output.push_str("Category:    (uncategorized)\n");
    } else {
        output.push_str(&format!("Category:    {}\n", txn.category));
    }

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    let kind = if txn.is_income() {
        "Income"
    } else if txn.is_expense() {
        "Expense"
    } else {
        "Zero"
    };
    output.push_str(&format!("Type:        {}\n", kind));

    output
}
