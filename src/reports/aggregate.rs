//! Aggregation primitives
//!
//! Every grouped sum goes through [`group_sum`]; the category and month
//! breakdowns only differ in the key they extract.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{Entry, EntryKind, Money, Month};

/// Sum the amounts of entries of `kind`, grouped by `key`
///
/// Entries of the other kind are skipped. The map is unordered; callers that
/// display it sort explicitly.
pub fn group_sum<'a, K, I, F>(entries: I, kind: EntryKind, mut key: F) -> HashMap<K, Money>
where
    I: IntoIterator<Item = &'a Entry>,
    K: Eq + Hash,
    F: FnMut(&Entry) -> K,
{
    let mut sums: HashMap<K, Money> = HashMap::new();
    for entry in entries.into_iter().filter(|e| e.kind == kind) {
        *sums.entry(key(entry)).or_default() += entry.amount;
    }
    sums
}

/// Total amount of entries of `kind`; zero for no entries
pub fn total<'a, I>(entries: I, kind: EntryKind) -> Money
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.amount)
        .sum()
}

/// Totals per category for entries of `kind`
///
/// Categories that differ only by case are summed together and reported
/// under the spelling seen first.
pub fn by_category<'a, I>(entries: I, kind: EntryKind) -> HashMap<String, Money>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut labels: HashMap<String, String> = HashMap::new();
    let sums = group_sum(entries, kind, |entry| {
        let folded = entry.category.to_lowercase();
        labels
            .entry(folded.clone())
            .or_insert_with(|| entry.category.clone());
        folded
    });

    sums.into_iter()
        .map(|(folded, amount)| {
            let label = labels.remove(&folded).unwrap_or(folded);
            (label, amount)
        })
        .collect()
}

/// Totals per calendar month for entries of `kind`
pub fn by_month<'a, I>(entries: I, kind: EntryKind) -> HashMap<Month, Money>
where
    I: IntoIterator<Item = &'a Entry>,
{
    group_sum(entries, kind, |entry| Month::of(entry.date))
}

/// Income minus expenses
pub fn net_balance<'a, I>(entries: I) -> Money
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .map(|e| match e.kind {
            EntryKind::Income => e.amount,
            EntryKind::Expense => -e.amount,
        })
        .sum()
}
