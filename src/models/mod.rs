//! Core data models for Pocketbook
//!
//! This module contains the data structures that represent the bookkeeping
//! domain: entries, amounts, months, currencies and the profile.

pub mod currency;
pub mod entry;
pub mod ids;
pub mod money;
pub mod month;
pub mod profile;

pub use currency::Currency;
pub use entry::{Entry, EntryKind};
pub use ids::EntryId;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use profile::Profile;
