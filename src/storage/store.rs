//! Record store for the ledger file
//!
//! The store owns the ordered list of entries and the profile, and is the only
//! thing that reads or writes `ledger.json`. Mutations only touch memory;
//! persisting them is an explicit [`Store::save`].
//!
//! There is no file locking. Two processes working on the same ledger at the
//! same time can overwrite each other's changes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Currency, Entry, EntryId, EntryKind, Money, Profile};

use super::file_io::{read_json, write_json_atomic};

const LEDGER_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    LEDGER_SCHEMA_VERSION
}

/// On-disk layout of the ledger file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    profile: Profile,
    /// Absent in hand-written files; recomputed from the entries then
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_id: Option<EntryId>,
    #[serde(default)]
    entries: Vec<Entry>,
}

/// In-memory ledger backed by a JSON file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    profile: Profile,
    entries: Vec<Entry>,
    next_id: EntryId,
}

impl Store {
    /// Create an empty store with the default profile, without touching disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            profile: Profile::default(),
            entries: Vec::new(),
            next_id: EntryId::FIRST,
        }
    }

    /// Load the ledger at `path`
    ///
    /// A missing file gives an empty store. A file that cannot be parsed, or
    /// that holds negative amounts or duplicate ids, fails with
    /// [`PocketbookError::CorruptData`]; the caller decides whether to reset.
    pub fn load(path: impl Into<PathBuf>) -> PocketbookResult<Self> {
        let path = path.into();

        let Some(data) = read_json::<LedgerData, _>(&path)? else {
            log::debug!("No ledger at {}, starting empty", path.display());
            return Ok(Self::new(path));
        };

        if data.schema_version > LEDGER_SCHEMA_VERSION {
            return Err(PocketbookError::corrupt(
                &path,
                format!("unsupported schema version {}", data.schema_version),
            ));
        }

        if data.profile.monthly_income_target.abs() > Money::MAX_ENTRY {
            return Err(PocketbookError::corrupt(
                &path,
                "monthly income target is out of range",
            ));
        }

        let mut seen = HashSet::new();
        for entry in &data.entries {
            if entry.amount.is_negative() {
                return Err(PocketbookError::corrupt(
                    &path,
                    format!("entry {} has a negative amount", entry.id),
                ));
            }
            if entry.amount > Money::MAX_ENTRY {
                return Err(PocketbookError::corrupt(
                    &path,
                    format!("entry {} has an amount above {}", entry.id, Money::MAX_ENTRY),
                ));
            }
            if !seen.insert(entry.id) {
                return Err(PocketbookError::corrupt(
                    &path,
                    format!("entry id {} appears more than once", entry.id),
                ));
            }
        }

        let after_max = match data.entries.iter().map(|e| e.id).max() {
            Some(max) => max.next().ok_or_else(|| {
                PocketbookError::corrupt(&path, format!("entry id {} is out of range", max))
            })?,
            None => EntryId::FIRST,
        };
        let next_id = data.next_id.map_or(after_max, |stored| stored.max(after_max));

        log::info!(
            "Loaded {} entries from {}",
            data.entries.len(),
            path.display()
        );

        Ok(Self {
            path,
            profile: data.profile,
            entries: data.entries,
            next_id,
        })
    }

    /// Write the whole ledger, replacing the previous file atomically
    pub fn save(&self) -> PocketbookResult<()> {
        let data = LedgerData {
            schema_version: LEDGER_SCHEMA_VERSION,
            profile: self.profile.clone(),
            next_id: Some(self.next_id),
            entries: self.entries.clone(),
        };
        write_json_atomic(&self.path, &data)?;
        log::info!(
            "Saved {} entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a new entry and return it
    ///
    /// Fails with [`PocketbookError::InvalidAmount`] for a negative amount or
    /// one above [`Money::MAX_ENTRY`], and with [`PocketbookError::Validation`]
    /// for a blank category. The store is left untouched on failure.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        amount: Money,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> PocketbookResult<Entry> {
        if amount.is_negative() {
            return Err(PocketbookError::InvalidAmount(format!(
                "{} (amounts must not be negative)",
                amount
            )));
        }
        if amount > Money::MAX_ENTRY {
            return Err(PocketbookError::InvalidAmount(format!(
                "{} (amounts must not exceed {})",
                amount,
                Money::MAX_ENTRY
            )));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(PocketbookError::Validation(
                "Category cannot be empty".into(),
            ));
        }

        let next_id = self.next_id.next().ok_or_else(|| {
            PocketbookError::Storage("No entry ids left in this ledger".into())
        })?;

        let entry = Entry {
            id: self.next_id,
            kind,
            amount,
            category: category.to_string(),
            description: description.trim().to_string(),
            date,
        };

        self.next_id = next_id;
        self.entries.push(entry.clone());
        log::debug!("Added entry {}", entry);

        Ok(entry)
    }

    /// Remove the entry with `id` and return it
    pub fn delete_entry(&mut self, id: EntryId) -> PocketbookResult<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| PocketbookError::entry_not_found(id.to_string()))?;

        let removed = self.entries.remove(index);
        log::debug!("Deleted entry {}", removed);
        Ok(removed)
    }

    /// Change the monthly income target; negative targets stand for debt
    pub fn set_monthly_income_target(&mut self, target: Money) -> PocketbookResult<()> {
        if target.abs() > Money::MAX_ENTRY {
            return Err(PocketbookError::InvalidAmount(format!(
                "{} (the income target must be within {})",
                target,
                Money::MAX_ENTRY
            )));
        }
        self.profile.monthly_income_target = target;
        Ok(())
    }

    /// Change the profile currency from a code such as "eur"
    pub fn set_currency(&mut self, code: &str) -> PocketbookResult<Currency> {
        let currency: Currency = code.parse()?;
        self.profile.currency = currency;
        Ok(currency)
    }

    /// Drop every entry and restore the default profile
    ///
    /// Ids keep counting up so that a removed id is never handed out again.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.profile = Profile::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::load(temp_dir.path().join("ledger.json")).unwrap();
        (temp_dir, store)
    }

    fn expense(store: &mut Store, units: i64, category: &str) -> PocketbookResult<Entry> {
        store.add_entry(
            EntryKind::Expense,
            Money::from_units(units),
            category,
            "",
            date(2024, 1, 1),
        )
    }

    fn seed(store: &mut Store) {
        let salary = Money::from_units(1000);
        store
            .add_entry(EntryKind::Income, salary, "salary", "", date(2024, 1, 5))
            .unwrap();
        let rent = Money::from_units(300);
        store
            .add_entry(EntryKind::Expense, rent, "rent", "flat", date(2024, 1, 10))
            .unwrap();
        let food = Money::from_units(50);
        store
            .add_entry(EntryKind::Expense, food, "food", "", date(2024, 2, 1))
            .unwrap();
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.is_empty());
        assert_eq!(store.profile(), &Profile::default());
    }

    #[test]
    fn test_add_assigns_increasing_ids_in_order() {
        let (_temp_dir, mut store) = create_test_store();
        seed(&mut store);

        let ids: Vec<_> = store.entries().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.entries()[1].category, "rent");
        assert_eq!(store.entries()[1].description, "flat");
    }

    #[test]
    fn test_add_trims_text() {
        let (_temp_dir, mut store) = create_test_store();
        let entry = store
            .add_entry(
                EntryKind::Expense,
                Money::from_units(5),
                "  Coffee ",
                " latte ",
                date(2024, 3, 1),
            )
            .unwrap();
        assert_eq!(entry.category, "Coffee");
        assert_eq!(entry.description, "latte");
    }

    #[test]
    fn test_negative_amount_rejected_without_mutation() {
        let (_temp_dir, mut store) = create_test_store();
        seed(&mut store);
        let before = store.entries().to_vec();

        let err = store
            .add_entry(
                EntryKind::Expense,
                Money::from_cents(-1),
                "food",
                "",
                date(2024, 1, 1),
            )
            .unwrap_err();

        assert!(matches!(err, PocketbookError::InvalidAmount(_)));
        assert_eq!(store.entries(), before.as_slice());

        // The failed attempt must not burn an id either
        let next = expense(&mut store, 0, "food").unwrap();
        assert_eq!(next.id, EntryId::new(4));
    }

    #[test]
    fn test_amount_above_limit_rejected() {
        let (_temp_dir, mut store) = create_test_store();
        let err = store
            .add_entry(
                EntryKind::Expense,
                Money::MAX_ENTRY + Money::from_cents(1),
                "yacht",
                "",
                date(2024, 1, 1),
            )
            .unwrap_err();
        assert!(matches!(err, PocketbookError::InvalidAmount(_)));
        assert!(store.is_empty());

        let limit = Money::parse("1000000000000").unwrap();
        store
            .add_entry(EntryKind::Expense, limit, "yacht", "", date(2024, 1, 1))
            .unwrap();
        store
            .add_entry(EntryKind::Expense, limit, "yacht", "", date(2024, 1, 2))
            .unwrap();
        assert_eq!(
            crate::reports::total(store.entries(), EntryKind::Expense),
            Money::from_units(2_000_000_000_000)
        );
    }

    #[test]
    fn test_income_target_limit() {
        let (_temp_dir, mut store) = create_test_store();
        store.set_monthly_income_target(Money::from_units(-500)).unwrap();
        assert_eq!(
            store.profile().monthly_income_target,
            Money::from_units(-500)
        );

        let err = store
            .set_monthly_income_target(-(Money::MAX_ENTRY + Money::from_units(1)))
            .unwrap_err();
        assert!(matches!(err, PocketbookError::InvalidAmount(_)));
        assert_eq!(
            store.profile().monthly_income_target,
            Money::from_units(-500)
        );
    }

    #[test]
    fn test_blank_category_rejected() {
        let (_temp_dir, mut store) = create_test_store();
        let err = store
            .add_entry(EntryKind::Income, Money::from_units(1), "   ", "", date(2024, 1, 1))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (_temp_dir, mut store) = create_test_store();
        seed(&mut store);

        let removed = store.delete_entry(EntryId::new(2)).unwrap();
        assert_eq!(removed.category, "rent");

        let ids: Vec<_> = store.entries().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let (_temp_dir, mut store) = create_test_store();
        seed(&mut store);
        let before = store.entries().to_vec();

        let err = store.delete_entry(EntryId::new(99)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let (_temp_dir, mut store) = create_test_store();
        seed(&mut store);
        store.delete_entry(EntryId::new(3)).unwrap();

        let entry = expense(&mut store, 1, "misc").unwrap();
        assert_eq!(entry.id, EntryId::new(4));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut store) = create_test_store();
        seed(&mut store);
        store
            .set_monthly_income_target(Money::from_units(2000))
            .unwrap();
        store.set_currency("eur").unwrap();
        store.delete_entry(EntryId::new(3)).unwrap();
        store.save().unwrap();

        let reloaded = Store::load(temp_dir.path().join("ledger.json")).unwrap();
        assert_eq!(reloaded.entries(), store.entries());
        assert_eq!(reloaded.profile(), store.profile());
        assert_eq!(reloaded.profile().currency, Currency::EUR);

        // next_id survives the round trip even though #3 is gone
        let mut reloaded = reloaded;
        let entry = expense(&mut reloaded, 1, "gift").unwrap();
        assert_eq!(entry.id, EntryId::new(4));
    }

    #[test]
    fn test_file_layout() {
        let (temp_dir, mut store) = create_test_store();
        seed(&mut store);
        store.save().unwrap();

        let raw = fs::read_to_string(temp_dir.path().join("ledger.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["profile"]["currency_code"], "USD");
        assert_eq!(value["profile"]["monthly_income_target"], 0.0);
        assert_eq!(value["entries"][0]["date"], "2024-01-05");
        assert_eq!(value["entries"][0]["kind"], "income");
        assert_eq!(value["entries"][0]["amount"], 1000.0);
        assert_eq!(value["entries"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_unsupported_currency_leaves_profile() {
        let (_temp_dir, mut store) = create_test_store();
        let err = store.set_currency("XYZ").unwrap_err();
        assert!(matches!(err, PocketbookError::UnsupportedCurrency(_)));
        assert_eq!(store.profile().currency, Currency::USD);
    }

    #[test]
    fn test_malformed_file_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let err = Store::load(&path).unwrap_err();
        assert!(err.is_corrupt());
        // Nothing was reset behind the caller's back
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ definitely not json");
    }

    #[test]
    fn test_negative_amount_in_file_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"{"entries": [
                {"id": 1, "kind": "expense", "amount": -5, "category": "x", "date": "2024-01-01"}
            ]}"#,
        )
        .unwrap();

        assert!(Store::load(&path).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_huge_amount_in_file_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"{"entries": [
                {"id": 1, "kind": "expense", "amount": 1e30, "category": "x", "date": "2024-01-01"}
            ]}"#,
        )
        .unwrap();

        assert!(Store::load(&path).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_last_possible_id_in_file_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"{"entries": [
                {"id": 18446744073709551615, "kind": "income", "amount": 1,
                 "category": "x", "date": "2024-01-01"}
            ]}"#,
        )
        .unwrap();

        assert!(Store::load(&path).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_duplicate_ids_in_file_are_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"{"entries": [
                {"id": 1, "kind": "expense", "amount": 5, "category": "x", "date": "2024-01-01"},
                {"id": 1, "kind": "income", "amount": 7, "category": "y", "date": "2024-01-02"}
            ]}"#,
        )
        .unwrap();

        assert!(Store::load(&path).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_hand_written_file_without_next_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"{"profile": {"monthly_income_target": 1500, "currency_code": "GBP"},
                "entries": [
                    {"id": 7, "kind": "income", "amount": 12.34, "category": "tips",
                     "date": "2024-05-01"}
                ]}"#,
        )
        .unwrap();

        let mut store = Store::load(&path).unwrap();
        assert_eq!(store.profile().currency, Currency::GBP);
        assert_eq!(store.entries()[0].amount, Money::from_cents(1234));
        assert_eq!(store.entries()[0].description, "");

        let entry = expense(&mut store, 1, "x").unwrap();
        assert_eq!(entry.id, EntryId::new(8));
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, mut store) = create_test_store();
        seed(&mut store);
        store.set_currency("JPY").unwrap();
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.profile(), &Profile::default());
    }
}
