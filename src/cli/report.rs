//! Report CLI commands
//!
//! Monthly summary, category breakdown and month-by-month breakdown.

use crate::config::Settings;
use crate::display::symbol;
use crate::error::PocketbookResult;
use crate::models::EntryKind;
use crate::reports::{CategoryReport, MonthlyBreakdown, MonthlySummary};
use crate::storage::Store;

use super::parse_month;

/// Handle `pocketbook summary`
pub fn handle_summary_command(
    store: &Store,
    settings: &Settings,
    month: Option<&str>,
) -> PocketbookResult<()> {
    let month = parse_month(month)?;
    let summary = MonthlySummary::generate(
        store.entries(),
        month,
        store.profile(),
        &settings.recommendation,
    );

    print!("{}", summary.format_terminal(symbol(store.profile().currency)));
    Ok(())
}

/// Handle `pocketbook categories`
pub fn handle_categories_command(store: &Store, kind: EntryKind) -> PocketbookResult<()> {
    let report = CategoryReport::generate(store.entries(), kind);
    print!("{}", report.format_terminal(symbol(store.profile().currency)));
    Ok(())
}

/// Handle `pocketbook monthly`
pub fn handle_monthly_command(store: &Store) -> PocketbookResult<()> {
    let report = MonthlyBreakdown::generate(store.entries(), store.profile());
    print!("{}", report.format_terminal(symbol(store.profile().currency)));
    Ok(())
}
