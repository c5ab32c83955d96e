//! Pocketbook - personal income and expense tracker
//!
//! This library provides the core of the `pocketbook` command line tool: a
//! local JSON ledger of income and expense entries, a filter engine over it,
//! aggregation and monthly reports, and a small user profile (monthly income
//! target and currency).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (entries, money, months, currencies, profile)
//! - `storage`: Atomic JSON persistence and the record store
//! - `services`: Entry filtering and audited ledger mutations
//! - `reports`: Aggregation, monthly summary and breakdown reports
//! - `display`: Terminal formatting and currency symbols
//! - `export`: CSV export
//! - `audit`: Audit logging system
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::models::{EntryKind, Money, Month};
//! use pocketbook::reports::monthly_summary;
//! use pocketbook::storage::Store;
//!
//! let mut store = Store::load("ledger.json")?;
//! store.add_entry(EntryKind::Income, Money::from_units(1000), "salary", "", date)?;
//! store.save()?;
//!
//! let summary = monthly_summary(store.entries(), Month::of(date), store.profile());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PocketbookError, PocketbookResult};
