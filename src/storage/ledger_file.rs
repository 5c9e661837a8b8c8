//! Ledger file codec
//!
//! The ledger file is comma-delimited text with a header line and one record
//! per line: `id,date,amount,category,description`. There is no quoting, so a
//! comma or line break inside the category or description cannot be stored
//! faithfully. Such records are still written, with a warning.

use std::io::{BufRead, Write};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CalendarDate, Transaction, TransactionId};

/// Header written on save; ignored on load
pub const HEADER: [&str; 5] = ["ID", "Date", "Amount", "Category", "Description"];

/// Number of fields in every record
pub const FIELD_COUNT: usize = HEADER.len();

const DELIMITER: u8 = b',';

/// Read all records after the header line
///
/// The first physical line is the header, whatever it contains. Records end
/// at `\n`; a trailing `\r` is dropped so CRLF files load too. Blank lines
/// are skipped. Nothing is returned unless every record parsed.
pub fn read_ledger<R: BufRead>(mut reader: R) -> LedgerResult<Vec<Transaction>> {
    let mut header = Vec::new();
    reader.read_until(b'\n', &mut header)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for result in reader.records() {
        let record = result.map_err(from_csv_error)?;
        let mut fields: Vec<&str> = record.iter().collect();
        if let Some(last) = fields.last_mut() {
            let field = *last;
            *last = field.strip_suffix('\r').unwrap_or(field);
        }
        if fields == [""] {
            continue;
        }
        transactions.push(parse_record(&fields)?);
    }

    Ok(transactions)
}

/// Write the header and every transaction in order
pub fn write_ledger<W: Write>(writer: W, transactions: &[Transaction]) -> LedgerResult<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(HEADER).map_err(from_csv_error)?;

    for txn in transactions {
        if has_delimiter_hazard(&txn.category) || has_delimiter_hazard(&txn.description) {
            warn!(
                id = %txn.id,
                "Transaction text contains a comma or line break and will not load back unchanged"
            );
        }

        let id = txn.id.to_string();
        let date = txn.date.to_string();
        let amount = txn.amount.to_string();
        writer
            .write_record([
                id.as_str(),
                date.as_str(),
                amount.as_str(),
                txn.category.as_str(),
                txn.description.as_str(),
            ])
            .map_err(from_csv_error)?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush ledger data: {}", e)))?;
    Ok(())
}

/// Parse the fields of one line into a transaction
fn parse_record(fields: &[&str]) -> LedgerResult<Transaction> {
    let line = fields.join(",");

    let &[id, date, amount, category, description] = fields else {
        return Err(LedgerError::Format(format!(
            "invalid number of columns (expected {}, found {}) in line: {}",
            FIELD_COUNT,
            fields.len(),
            line
        )));
    };

    let parse_fields = || -> LedgerResult<Transaction> {
        let id = id
            .parse::<u64>()
            .map_err(|e| LedgerError::Format(format!("invalid id '{}': {}", id, e)))?;
        let date = CalendarDate::parse(date)?;
        let amount = amount
            .parse::<f64>()
            .map_err(|e| LedgerError::Format(format!("invalid amount '{}': {}", amount, e)))?;

        Ok(Transaction::new(
            TransactionId::new(id),
            date,
            amount,
            category,
            description,
        ))
    };

    parse_fields().map_err(|source| LedgerError::record(line.as_str(), source))
}

fn has_delimiter_hazard(text: &str) -> bool {
    text.contains(|c: char| c == DELIMITER as char || c == '\n' || c == '\r')
}

fn from_csv_error(err: csv::Error) -> LedgerError {
    if err.is_io_error() {
        LedgerError::Io(err.to_string())
    } else {
        LedgerError::Format(err.to_string())
    }
}
