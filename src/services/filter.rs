//! Entry filtering
//!
//! Narrows a list of entries by date range, category, kind and free text.
//! Every criterion that is set must match; unset criteria don't restrict.

use chrono::NaiveDate;

use crate::models::{Entry, EntryKind, Month};

/// Options for filtering entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Earliest date to include (inclusive)
    pub date_from: Option<NaiveDate>,
    /// Latest date to include (inclusive)
    pub date_to: Option<NaiveDate>,
    /// Exact category, compared case-insensitively
    pub category: Option<String>,
    pub kind: Option<EntryKind>,
    /// Case-insensitive substring of the category or description
    pub text_query: Option<String>,
}

impl EntryFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Filter by date range (both ends inclusive)
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from_date(start).to_date(end)
    }

    /// Restrict to a single calendar month
    pub fn month(self, month: Month) -> Self {
        self.date_range(month.start_date(), month.end_date())
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn text(mut self, query: impl Into<String>) -> Self {
        self.text_query = Some(query.into());
        self
    }

    /// Check if no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check a single entry against every criterion
    pub fn matches(&self, entry: &Entry) -> bool {
        let needle = self.normalized_text();
        self.matches_with(entry, needle.as_deref())
    }

    fn normalized_text(&self) -> Option<String> {
        self.text_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn matches_with(&self, entry: &Entry, needle: Option<&str>) -> bool {
        if self.date_from.is_some_and(|from| entry.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| entry.date > to) {
            return false;
        }
        if self.kind.is_some_and(|kind| entry.kind != kind) {
            return false;
        }
        if let Some(category) = self.category.as_deref() {
            if !category.trim().is_empty() && !entry.category_is(category) {
                return false;
            }
        }
        if let Some(needle) = needle {
            if !entry.mentions_lowercase(needle) {
                return false;
            }
        }
        true
    }

    /// Apply the filter, keeping insertion order
    ///
    /// Returns an empty list when nothing matches.
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        let needle = self.normalized_text();
        entries
            .iter()
            .filter(|e| self.matches_with(e, needle.as_deref()))
            .collect()
    }
}

/// Select the entries matching `filter`, in their original order
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &EntryFilter) -> Vec<&'a Entry> {
    filter.apply(entries)
}
