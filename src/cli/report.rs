//! CLI command for reports
//!
//! Generates the income/expense report for a date range.

use clap::Args;

use crate::display::format_period_report;
use crate::error::{LedgerError, LedgerResult};
use crate::models::CalendarDate;
use crate::reports::PeriodReport;
use crate::storage::TransactionStore;

/// Arguments of the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: CalendarDate,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: CalendarDate,
}

/// Handle the report command
pub fn handle_report_command(store: &TransactionStore, args: ReportArgs) -> LedgerResult<()> {
    if args.start > args.end {
        return Err(LedgerError::Validation(format!(
            "Start date {} is after end date {}",
            args.start, args.end
        )));
    }

    let report = PeriodReport::generate(store, args.start, args.end);
    print!("{}", format_period_report(&report));

    Ok(())
}
