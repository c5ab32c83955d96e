//! Entry CLI commands
//!
//! Adding, listing, searching and deleting ledger entries.

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_register, symbol};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{EntryId, EntryKind};
use crate::services::{EntryFilter, LedgerService, NewEntry};
use crate::storage::Store;

use super::{parse_amount, parse_date, parse_month};

/// Arguments of `pocketbook add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Entry kind: income or expense
    pub kind: EntryKind,
    /// Amount, e.g. "300" or "12.50"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category label, e.g. "rent"
    pub category: String,
    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Entry date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Filters shared by `list` and `export`
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Only this month (YYYY-MM)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub month: Option<String>,
    /// Category, case-insensitive
    #[arg(short, long)]
    pub category: Option<String>,
    /// Only income or only expense entries
    #[arg(short, long)]
    pub kind: Option<EntryKind>,
    /// Text to look for in the category or description
    #[arg(short, long)]
    pub text: Option<String>,
}

impl FilterArgs {
    /// Build the entry filter, validating the dates
    pub fn to_filter(&self) -> PocketbookResult<EntryFilter> {
        let mut filter = EntryFilter::new();

        if let Some(month) = &self.month {
            filter = filter.month(parse_month(Some(month))?);
        }
        if let Some(from) = &self.from {
            filter = filter.from_date(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.to_date(parse_date(to)?);
        }
        if let Some(category) = &self.category {
            filter = filter.category(category.as_str());
        }
        if let Some(kind) = self.kind {
            filter = filter.kind(kind);
        }
        if let Some(text) = &self.text {
            filter = filter.text(text.as_str());
        }

        Ok(filter)
    }
}

/// Handle `pocketbook add`
pub fn handle_add_command(
    store: &mut Store,
    audit: &AuditLogger,
    args: AddArgs,
) -> PocketbookResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match args.date {
        Some(date) => parse_date(&date)?,
        None => chrono::Local::now().date_naive(),
    };

    let input = NewEntry {
        kind: args.kind,
        amount,
        category: args.category,
        description: args.description.unwrap_or_default(),
        date,
    };

    let mut service = LedgerService::new(store, audit);
    let entry = service.add_entry(input)?;
    let currency_symbol = symbol(service.store().profile().currency);

    println!("Recorded {}:", entry.kind.as_str());
    print!("{}", format_entry_details(&entry, currency_symbol));

    Ok(())
}

/// Handle `pocketbook list`
pub fn handle_list_command(
    store: &Store,
    settings: &Settings,
    filters: &FilterArgs,
) -> PocketbookResult<()> {
    let filter = filters.to_filter()?;
    let entries = filter.apply(store.entries());

    print!(
        "{}",
        format_entry_register(
            entries,
            symbol(store.profile().currency),
            &settings.date_format
        )
    );
    Ok(())
}

/// Handle `pocketbook search`
pub fn handle_search_command(
    store: &Store,
    settings: &Settings,
    query: &str,
) -> PocketbookResult<()> {
    if query.trim().is_empty() {
        return Err(PocketbookError::Validation(
            "Search text must not be empty".into(),
        ));
    }

    let entries = EntryFilter::new().text(query).apply(store.entries());
    if entries.is_empty() {
        println!("No entries match '{}'.", query.trim());
        return Ok(());
    }

    print!(
        "{}",
        format_entry_register(
            entries,
            symbol(store.profile().currency),
            &settings.date_format
        )
    );
    Ok(())
}

/// Handle `pocketbook delete`
pub fn handle_delete_command(
    store: &mut Store,
    audit: &AuditLogger,
    id: &str,
) -> PocketbookResult<()> {
    let id: EntryId = id.parse().map_err(|_| {
        PocketbookError::Validation(format!("Invalid entry id '{}'. Use a number like 12", id))
    })?;

    let removed = LedgerService::new(store, audit).delete_entry(id)?;
    println!("Deleted {}", removed);

    Ok(())
}
