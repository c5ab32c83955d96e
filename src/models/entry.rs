//! Ledger entry model
//!
//! An entry records one income or expense event. The direction of money is
//! carried by [`EntryKind`]; the amount itself is never negative.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;

/// Whether an entry brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Both kinds, income first
    pub const ALL: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("Income"),
            Self::Expense => f.pad("Expense"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "i" => Ok(Self::Income),
            "expense" | "out" | "e" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown entry kind '{}'. Use 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A single recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned by the store
    pub id: EntryId,

    pub kind: EntryKind,

    /// Non-negative amount in the profile currency
    pub amount: Money,

    /// Short free-form label, compared case-insensitively
    pub category: String,

    #[serde(default)]
    pub description: String,

    pub date: NaiveDate,
}

impl Entry {
    /// Check whether the category matches `category`, ignoring case
    pub fn category_is(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }

    /// Check whether `needle` (already lowercased) occurs in the category or description
    pub(crate) fn mentions_lowercase(&self, needle: &str) -> bool {
        self.category.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}
