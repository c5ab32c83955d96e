//! Business logic layer for Pocketbook
//!
//! The filter narrows entry lists for reports and listings; the ledger service
//! applies mutations, persists them and writes the audit trail.

pub mod filter;
pub mod ledger;

pub use filter::{filter_entries, EntryFilter};
pub use ledger::{LedgerService, NewEntry};
