//! Per-ledger profile settings
//!
//! The profile holds the monthly income target and the preferred currency. It
//! is persisted alongside the entries and passed explicitly to anything that
//! needs it.

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::money::Money;

/// Monthly income target and preferred currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    /// Expected income per month. May be negative, which is treated as debt.
    #[serde(default)]
    pub monthly_income_target: Money,

    #[serde(default, rename = "currency_code")]
    pub currency: Currency,
}

impl Profile {
    pub fn new(monthly_income_target: Money, currency: Currency) -> Self {
        Self {
            monthly_income_target,
            currency,
        }
    }
}
