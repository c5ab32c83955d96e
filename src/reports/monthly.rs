//! Monthly Breakdown
//!
//! One row per month that has entries, oldest first, with the month's
//! expenses compared against the profile's income target.

use std::collections::BTreeSet;

use crate::models::{Entry, EntryKind, Money, Month, Profile};

use super::aggregate::by_month;

/// Totals for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRow {
    pub month: Month,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
    /// Income target minus expenses; negative is a deficit
    pub against_target: Money,
}

impl MonthRow {
    pub fn is_deficit(&self) -> bool {
        self.against_target.is_negative()
    }
}

/// Month by month breakdown of the whole ledger
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBreakdown {
    pub income_target: Money,
    /// Months in ascending order
    pub rows: Vec<MonthRow>,
}

impl MonthlyBreakdown {
    pub fn generate<'a, I>(entries: I, profile: &Profile) -> Self
    where
        I: IntoIterator<Item = &'a Entry> + Clone,
    {
        let income = by_month(entries.clone(), EntryKind::Income);
        let expenses = by_month(entries, EntryKind::Expense);
        let target = profile.monthly_income_target;

        let months: BTreeSet<Month> = income.keys().chain(expenses.keys()).copied().collect();

        let rows = months
            .into_iter()
            .map(|month| {
                let income = income.get(&month).copied().unwrap_or_default();
                let expenses = expenses.get(&month).copied().unwrap_or_default();
                MonthRow {
                    month,
                    income,
                    expenses,
                    net: income - expenses,
                    against_target: target - expenses,
                }
            })
            .collect();

        Self {
            income_target: target,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.rows.is_empty() {
            return "No entries recorded.\n".to_string();
        }

        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str("Monthly Breakdown\n");
        output.push_str(&format!("Income target: {}\n", money(self.income_target)));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14} {:>18}\n",
            "Month", "Income", "Expenses", "Net", "vs Target"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let status = if row.is_deficit() {
                format!("deficit {}", money(row.against_target.abs()))
            } else {
                format!("surplus {}", money(row.against_target))
            };
            output.push_str(&format!(
                "{:<8} {:>14} {:>14} {:>14} {:>18}\n",
                row.month,
                money(row.income),
                money(row.expenses),
                money(row.net),
                status
            ));
        }

        output
    }
}
