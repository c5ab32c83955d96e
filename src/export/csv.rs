//! CSV Export functionality
//!
//! Writes ledger entries in a spreadsheet-friendly layout.

use std::io::Write;

use crate::error::PocketbookResult;
use crate::models::Entry;

/// Column header of the entry export
pub const ENTRY_CSV_HEADER: [&str; 6] = ["id", "date", "kind", "category", "description", "amount"];

/// Export entries to CSV, one row per entry in the given order
///
/// Returns the number of rows written, excluding the header.
pub fn export_entries_csv<'a, I, W>(entries: I, writer: W) -> PocketbookResult<usize>
where
    I: IntoIterator<Item = &'a Entry>,
    W: Write,
{
    let mut out = ::csv::Writer::from_writer(writer);
    out.write_record(ENTRY_CSV_HEADER)?;

    let mut rows = 0;
    for entry in entries {
        out.write_record([
            entry.id.value().to_string(),
            entry.date.format("%Y-%m-%d").to_string(),
            entry.kind.as_str().to_string(),
            entry.category.clone(),
            entry.description.clone(),
            entry.amount.to_string(),
        ])?;
        rows += 1;
    }

    out.flush()?;
    Ok(rows)
}
