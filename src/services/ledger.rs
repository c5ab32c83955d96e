//! Ledger service
//!
//! Wraps the store mutations with the save-after-every-change policy used by
//! the command line, and records each change in the audit log.
//!
//! The ledger file is the source of truth. Once a change is saved it stands,
//! even if the audit log cannot be written; that failure is logged as a
//! warning.

use chrono::NaiveDate;

use crate::audit::{AuditLogger, Change};
use crate::error::PocketbookResult;
use crate::models::{Currency, Entry, EntryId, EntryKind, Money, Profile};
use crate::storage::Store;

/// Input for recording a new entry
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub kind: EntryKind,
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Service for ledger mutations
pub struct LedgerService<'a> {
    store: &'a mut Store,
    audit: &'a AuditLogger,
}

impl<'a> LedgerService<'a> {
    pub fn new(store: &'a mut Store, audit: &'a AuditLogger) -> Self {
        Self { store, audit }
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &Store {
        self.store
    }

    /// Record a new entry, save the ledger and audit the addition
    pub fn add_entry(&mut self, input: NewEntry) -> PocketbookResult<Entry> {
        let entry = self.store.add_entry(
            input.kind,
            input.amount,
            &input.category,
            &input.description,
            input.date,
        )?;
        self.store.save()?;

        log::info!("Recorded {} {}", entry.kind.as_str(), entry.id);
        self.audit_change(Change::EntryAdded {
            entry: entry.clone(),
        });
        Ok(entry)
    }

    /// Delete an entry, save the ledger and audit the removal
    pub fn delete_entry(&mut self, id: EntryId) -> PocketbookResult<Entry> {
        let removed = self.store.delete_entry(id)?;
        self.store.save()?;

        log::info!("Deleted entry {}", removed.id);
        self.audit_change(Change::EntryDeleted {
            entry: removed.clone(),
        });
        Ok(removed)
    }

    /// Change the monthly income target
    pub fn set_monthly_income_target(&mut self, target: Money) -> PocketbookResult<Profile> {
        let from = self.store.profile().monthly_income_target;
        if target.is_negative() {
            log::warn!("Negative monthly income target {} will be treated as debt", target);
        }
        self.store.set_monthly_income_target(target)?;
        self.store.save()?;

        self.audit_change(Change::IncomeTargetChanged { from, to: target });
        Ok(self.store.profile().clone())
    }

    /// Change the currency from a code such as "EUR"
    ///
    /// An unsupported code fails before anything is saved or audited.
    pub fn set_currency(&mut self, code: &str) -> PocketbookResult<Profile> {
        let from = self.store.profile().currency;
        let to: Currency = self.store.set_currency(code)?;
        self.store.save()?;

        self.audit_change(Change::CurrencyChanged { from, to });
        Ok(self.store.profile().clone())
    }

    /// Drop every entry and reset the profile
    pub fn reset(&mut self) -> PocketbookResult<usize> {
        let entries_removed = self.store.len();
        let profile = self.store.profile().clone();
        self.store.clear();
        self.store.save()?;

        log::info!("Reset ledger, {} entries removed", entries_removed);
        self.audit_change(Change::LedgerReset {
            entries_removed,
            profile,
        });
        Ok(entries_removed)
    }

    fn audit_change(&self, change: Change) {
        if let Err(err) = self.audit.record(change) {
            log::warn!(
                "Change saved but not written to {}: {}",
                self.audit.path().display(),
                err
            );
        }
    }
}
