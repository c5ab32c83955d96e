//! Audit log of ledger changes
//!
//! Every entry added or deleted, every profile change and every reset is
//! appended to `audit.log` as one JSON line.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::audit::{AuditLogger, Change};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.record(Change::EntryAdded { entry })?;
//! ```

mod logger;
mod record;

pub use logger::AuditLogger;
pub use record::{AuditRecord, Change};
