//! Monthly summary
//!
//! Income, expenses and net balance for one month, compared against the
//! profile's income target, with a recommendation picked by the
//! [`RecommendationPolicy`]. Two figures look at the whole ledger instead of
//! the month: the income required to cover every recorded expense, and how
//! far those expenses run past a year of the income target.

use std::fmt;

use crate::config::RecommendationPolicy;
use crate::models::{Entry, EntryKind, Money, Month, Profile};

use super::aggregate::total;

/// Outcome of the recommendation policy for a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Expenses exceed income
    Overspending,
    /// Still positive, but expenses take a large share of income
    Caution,
    OnTrack,
}

impl Recommendation {
    /// Pick a recommendation for the given month totals
    pub fn assess(income: Money, expenses: Money, policy: &RecommendationPolicy) -> Self {
        let net = income - expenses;
        if net.is_negative() {
            return Self::Overspending;
        }
        match expenses.ratio_of(income) {
            Some(spent) if spent > policy.caution_ratio => Self::Caution,
            _ => Self::OnTrack,
        }
    }

    /// One-line message for display
    pub fn message(&self) -> &'static str {
        match self {
            Self::Overspending => "You're spending more than you earn this month",
            Self::Caution => "Careful: expenses are taking most of your income",
            Self::OnTrack => "You're on track",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overspending => f.pad("overspending"),
            Self::Caution => f.pad("caution"),
            Self::OnTrack => f.pad("on track"),
        }
    }
}

/// Income and spending for a single month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: Month,
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses
    pub net: Money,
    pub income_target: Money,
    /// Income minus the target; negative when short of the target
    pub variance: Money,
    /// How much more income would be needed to break even
    pub additional_income_needed: Money,
    /// Positive part of the net balance
    pub savings: Money,
    /// Savings as a share of income; `None` without income
    pub savings_rate: Option<f64>,
    /// Expenses over the whole ledger, the income needed to cover them
    pub required_monthly_income: Money,
    /// Ledger expenses beyond twelve months of the income target
    pub annual_shortfall: Option<Money>,
    pub recommendation: Recommendation,
    target_savings_rate: f64,
}

impl MonthlySummary {
    /// Summarise `month` using the given policy thresholds
    pub fn generate<'a, I>(
        entries: I,
        month: Month,
        profile: &Profile,
        policy: &RecommendationPolicy,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let all: Vec<&Entry> = entries.into_iter().collect();
        let in_month: Vec<&Entry> = all
            .iter()
            .copied()
            .filter(|e| month.contains(e.date))
            .collect();

        let income = total(in_month.iter().copied(), EntryKind::Income);
        let expenses = total(in_month.iter().copied(), EntryKind::Expense);
        let net = income - expenses;
        let savings = net.max_zero();

        let ledger_expenses = total(all.iter().copied(), EntryKind::Expense);
        let annual_shortfall = ledger_expenses - profile.monthly_income_target.times(12);

        Self {
            month,
            income,
            expenses,
            net,
            income_target: profile.monthly_income_target,
            variance: income - profile.monthly_income_target,
            additional_income_needed: (expenses - income).max_zero(),
            savings,
            savings_rate: savings.ratio_of(income).filter(|_| income.is_positive()),
            required_monthly_income: ledger_expenses,
            annual_shortfall: Some(annual_shortfall).filter(|m| m.is_positive()),
            recommendation: Recommendation::assess(income, expenses, policy),
            target_savings_rate: policy.target_savings_rate,
        }
    }

    /// Advice lines that go with the recommendation
    pub fn advice(&self, symbol: &str) -> Vec<String> {
        let mut lines = Vec::new();

        if self.net.is_negative() {
            lines.push(format!(
                "Consider reducing expenses by {}",
                self.net.abs().format_with_symbol(symbol)
            ));
            lines.push(format!(
                "Or increase income by {}",
                self.additional_income_needed.format_with_symbol(symbol)
            ));
        } else if let Some(rate) = self.savings_rate.filter(|_| self.savings.is_positive()) {
            lines.push(format!("You're saving {:.1}% of your income", rate * 100.0));
            if rate < self.target_savings_rate {
                lines.push(format!(
                    "Consider increasing your savings rate to {:.0}% if possible",
                    self.target_savings_rate * 100.0
                ));
            }
        }

        if self.variance.is_negative() {
            lines.push(format!(
                "Income is {} below your monthly target",
                self.variance.abs().format_with_symbol(symbol)
            ));
        }

        if let Some(shortfall) = self.annual_shortfall {
            lines.push(format!(
                "Annual expenses exceed annual income by {}",
                shortfall.format_with_symbol(symbol)
            ));
        }

        lines
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&format!("Monthly Summary: {}\n", self.month.long_name()));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<28} {:>20}\n", "Income:", money(self.income)));
        output.push_str(&format!("{:<28} {:>20}\n", "Expenses:", money(self.expenses)));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<28} {:>20}\n", "Net Balance:", money(self.net)));
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Income Target:",
            money(self.income_target)
        ));
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Variance vs Target:",
            money(self.variance)
        ));
        if self.additional_income_needed.is_positive() {
            output.push_str(&format!(
                "{:<28} {:>20}\n",
                "Additional Income Needed:",
                money(self.additional_income_needed)
            ));
        }
        if self.savings.is_positive() {
            output.push_str(&format!("{:<28} {:>20}\n", "Savings:", money(self.savings)));
        }
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Required Monthly Income:",
            money(self.required_monthly_income)
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Recommendation: {} - {}\n",
            self.recommendation,
            self.recommendation.message()
        ));
        for line in self.advice(symbol) {
            output.push_str(&format!("  * {}\n", line));
        }

        output
    }
}

/// Summarise `month` with the default recommendation thresholds
pub fn monthly_summary<'a, I>(entries: I, month: Month, profile: &Profile) -> MonthlySummary
where
    I: IntoIterator<Item = &'a Entry>,
{
    MonthlySummary::generate(entries, month, profile, &RecommendationPolicy::default())
}
