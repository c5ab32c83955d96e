//! Supported currency codes
//!
//! The core only stores and passes the code around. How a code is rendered
//! (symbol, placement) is the display layer's business.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PocketbookError;

/// Macro to generate the currency enum together with its code table
macro_rules! define_currencies {
    ($($variant:ident),+ $(,)?) => {
        /// An ISO 4217 currency code from the fixed supported set
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(rename_all = "UPPERCASE")]
        #[allow(clippy::upper_case_acronyms)]
        pub enum Currency {
            #[default]
            $($variant),+
        }

        impl Currency {
            /// Every supported currency, in display order
            pub const ALL: &'static [Currency] = &[$(Currency::$variant),+];

            /// The three-letter code, e.g. "USD"
            pub fn code(&self) -> &'static str {
                match self {
                    $(Currency::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

define_currencies!(
    USD, EUR, GBP, JPY, CAD, AUD, CHF, CNY, INR, BRL, RUB, KRW, SEK, NOK, DKK, PLN, CZK, HUF, BGN,
    RON,
);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Currency {
    type Err = PocketbookError;

    /// Parse a currency code, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| PocketbookError::UnsupportedCurrency(s.trim().to_string()))
    }
}
