//! Audit records
//!
//! Each record is one change to the ledger, stored with the data needed to
//! understand it later: the full entry for additions and deletions, the old
//! and new value for profile changes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Currency, Entry, Money, Profile};

/// A change made to the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    EntryAdded { entry: Entry },
    EntryDeleted { entry: Entry },
    IncomeTargetChanged { from: Money, to: Money },
    CurrencyChanged { from: Currency, to: Currency },
    /// Every entry dropped; `profile` is the profile as it was before
    LedgerReset { entries_removed: usize, profile: Profile },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::EntryAdded { entry } => write!(f, "added {}", describe(entry)),
            Change::EntryDeleted { entry } => write!(f, "deleted {}", describe(entry)),
            Change::IncomeTargetChanged { from, to } => {
                write!(f, "income target {} -> {}", from, to)
            }
            Change::CurrencyChanged { from, to } => write!(f, "currency {} -> {}", from, to),
            Change::LedgerReset {
                entries_removed, ..
            } => write!(f, "reset, {} entries removed", entries_removed),
        }
    }
}

fn describe(entry: &Entry) -> String {
    format!(
        "{} {} {} {} on {}",
        entry.id,
        entry.kind.as_str(),
        entry.category,
        entry.amount,
        entry.date
    )
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the change was made (UTC)
    pub at: DateTime<Utc>,

    #[serde(flatten)]
    pub change: Change,
}

impl AuditRecord {
    /// Stamp `change` with the current time
    pub fn now(change: Change) -> Self {
        Self {
            at: Utc::now(),
            change,
        }
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%Y-%m-%d %H:%M:%S UTC"), self.change)
    }
}
