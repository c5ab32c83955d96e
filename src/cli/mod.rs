//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod export;
pub mod history;
pub mod profile;
pub mod report;

use chrono::NaiveDate;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, Month};

pub use entry::{
    handle_add_command, handle_delete_command, handle_list_command, handle_search_command,
    AddArgs, FilterArgs,
};
pub use export::handle_export_command;
pub use history::handle_history_command;
pub use profile::{handle_currencies_command, handle_profile_command, ProfileCommands};
pub use report::{handle_categories_command, handle_monthly_command, handle_summary_command};

/// Parse a YYYY-MM-DD date given on the command line
pub fn parse_date(input: &str) -> PocketbookResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        PocketbookError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            input
        ))
    })
}

/// Parse a YYYY-MM month, defaulting to the current month
pub fn parse_month(input: Option<&str>) -> PocketbookResult<Month> {
    match input {
        Some(text) => Month::parse(text).map_err(|e| {
            PocketbookError::Validation(format!("Invalid month '{}': {}. Use YYYY-MM", text, e))
        }),
        None => Ok(Month::current()),
    }
}

/// Parse an amount such as "12.34" or "$12.34"
///
/// The sign is kept; rejecting negatives is the store's job.
pub fn parse_amount(input: &str) -> PocketbookResult<Money> {
    Money::parse(input).map_err(|e| {
        PocketbookError::Validation(format!(
            "Invalid amount format: '{}'. Use a format like '50.00' or '100'. Error: {}",
            input, e
        ))
    })
}
