//! Category Report
//!
//! Totals per category for one kind of entry, largest first, with each
//! category's share of the overall total.

use crate::models::{Entry, EntryKind, Money};

use super::aggregate::by_category;

/// One category line of the report
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Money,
    /// Share of the report total, 0-100
    pub percentage: f64,
}

/// Category breakdown for one kind of entry
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub kind: EntryKind,
    /// Sorted by amount (largest first), then by category name
    pub rows: Vec<CategoryRow>,
    pub total: Money,
}

impl CategoryReport {
    /// Generate the breakdown for entries of `kind`
    pub fn generate<'a, I>(entries: I, kind: EntryKind) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let sums = by_category(entries, kind);
        let total: Money = sums.values().sum();

        let mut rows: Vec<CategoryRow> = sums
            .into_iter()
            .map(|(category, amount)| CategoryRow {
                percentage: amount.ratio_of(total).map_or(0.0, |r| r * 100.0),
                category,
                amount,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.to_lowercase().cmp(&b.category.to_lowercase()))
        });

        Self { kind, rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.rows.is_empty() {
            return format!("No {} entries recorded.\n", self.kind.as_str());
        }

        let mut output = String::new();
        output.push_str(&format!("{} by Category\n", self.kind));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>15} {:>9}\n", "Category", "Amount", "Share"));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<24} {:>15} {:>8.1}%\n",
                truncate(&row.category, 24),
                row.amount.format_with_symbol(symbol),
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>15}\n",
            "Total",
            self.total.format_with_symbol(symbol)
        ));

        output
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::aggregate::tests::{entry, example_entries};

    #[test]
    fn test_sorted_largest_first_with_percentages() {
        let entries = example_entries();
        let report = CategoryReport::generate(&entries, EntryKind::Expense);

        assert_eq!(report.total, Money::from_units(350));
        let names: Vec<&str> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["rent", "food"]);

        let share: f64 = report.rows.iter().map(|r| r.percentage).sum();
        assert!((share - 100.0).abs() < 1e-9);
        assert!((report.rows[0].percentage - 85.714).abs() < 0.001);
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let entries = vec![
            entry(1, EntryKind::Expense, 1_000, "travel", 2024, 3, 1),
            entry(2, EntryKind::Expense, 1_000, "Books", 2024, 3, 2),
            entry(3, EntryKind::Expense, 1_000, "coffee", 2024, 3, 3),
        ];
        let report = CategoryReport::generate(&entries, EntryKind::Expense);
        let names: Vec<&str> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Books", "coffee", "travel"]);
    }

    #[test]
    fn test_income_only() {
        let entries = example_entries();
        let report = CategoryReport::generate(&entries, EntryKind::Income);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].category, "salary");
        assert_eq!(report.rows[0].percentage, 100.0);
    }

    #[test]
    fn test_empty() {
        let report = CategoryReport::generate(&[], EntryKind::Expense);
        assert!(report.is_empty());
        assert_eq!(report.total, Money::zero());
        assert_eq!(report.format_terminal("$"), "No expense entries recorded.\n");
    }

    #[test]
    fn test_format_terminal() {
        let entries = example_entries();
        let output = CategoryReport::generate(&entries, EntryKind::Expense).format_terminal("£");

        assert!(output.starts_with("Expense by Category"));
        assert!(output.contains("£300.00"));
        assert!(output.contains("85.7%"));
        assert!(output.contains("£350.00"));
    }
}
