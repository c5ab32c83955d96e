//! Export module for Pocketbook
//!
//! CSV export of ledger entries, optionally narrowed by a filter first.

pub mod csv;

pub use self::csv::{export_entries_csv, ENTRY_CSV_HEADER};
