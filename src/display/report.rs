//! Report formatting utilities for terminal output

use crate::reports::PeriodReport;

const REPORT_WIDTH: usize = 40;

/// Format a period report with totals and the expense breakdown
pub fn format_period_report(report: &PeriodReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Report for {} to {}\n",
        report.start_date, report.end_date
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("{:<20}{:>20.2}\n", "Total Income:", report.total_income));
    output.push_str(&format!("{:<20}{:>20.2}\n", "Total Expense:", report.total_expense));
    output.push_str(&format!("{:<20}{:>20.2}\n", "Net Balance:", report.net_balance()));
    output.push_str(&format!("{:<20}{:>20}\n", "Transactions:", report.transaction_count));
    output.push('\n');
    output.push_str("Expenses by Category:\n");

    if report.expenses_by_category.is_empty() {
        output.push_str("  No expenses in this period.\n");
    } else {
        for (category, amount) in report.top_expenses() {
            let name = if category.is_empty() {
                "(uncategorized)"
            } else {
                category
            };
            output.push_str(&format!("  - {:<22}{:>13.2}\n", truncate(name, 22), amount));
        }
    }

    output
}

/// Truncate a string to at most `max_len` characters, with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
