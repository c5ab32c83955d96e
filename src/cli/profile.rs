//! Profile CLI commands

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::display::{format_amount, format_currency_list, symbol};
use crate::error::PocketbookResult;
use crate::models::Profile;
use crate::services::LedgerService;
use crate::storage::Store;

use super::parse_amount;

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the monthly income target and currency
    Show,
    /// Set the monthly income target (negative values represent debt)
    Income {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set the currency by ISO code, e.g. EUR
    Currency { code: String },
}

/// Handle a profile command
pub fn handle_profile_command(
    store: &mut Store,
    audit: &AuditLogger,
    cmd: ProfileCommands,
) -> PocketbookResult<()> {
    match cmd {
        ProfileCommands::Show => {
            print!("{}", format_profile(store.profile()));
        }
        ProfileCommands::Income { amount } => {
            let target = parse_amount(&amount)?;
            let profile = LedgerService::new(store, audit).set_monthly_income_target(target)?;
            println!(
                "Monthly income target set to {}",
                format_amount(profile.monthly_income_target, profile.currency)
            );
            if target.is_negative() {
                println!("Note: a negative target is treated as debt.");
            }
        }
        ProfileCommands::Currency { code } => {
            let profile = LedgerService::new(store, audit).set_currency(&code)?;
            println!(
                "Currency set to {} ({})",
                profile.currency,
                symbol(profile.currency)
            );
        }
    }

    Ok(())
}

/// Handle `pocketbook currencies`
pub fn handle_currencies_command(store: &Store) -> PocketbookResult<()> {
    println!("Supported currencies (* = current):");
    print!("{}", format_currency_list(store.profile().currency));
    Ok(())
}

fn format_profile(profile: &Profile) -> String {
    format!(
        "Profile\n=======\nMonthly income target: {}\nCurrency:              {} ({})\n",
        format_amount(profile.monthly_income_target, profile.currency),
        profile.currency,
        symbol(profile.currency)
    )
}
