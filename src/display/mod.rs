//! Display formatting for terminal output
//!
//! Register views of entries and the currency symbol table. Reports format
//! themselves; they only take the symbol from here.

pub mod currency;
pub mod entry;

pub use currency::{format_amount, format_currency_list, symbol};
pub use entry::{format_entry_details, format_entry_register, format_entry_row};
