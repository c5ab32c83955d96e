//! Entry display formatting
//!
//! Register view of ledger entries for the terminal.

use crate::models::{Entry, EntryKind, Money};

/// Format a single entry as a register row
pub fn format_entry_row(entry: &Entry, symbol: &str, date_format: &str) -> String {
    let signed = match entry.kind {
        EntryKind::Income => entry.amount,
        EntryKind::Expense => -entry.amount,
    };

    let description = if entry.description.is_empty() {
        String::new()
    } else {
        format!(" {}", truncate(&entry.description, 30))
    };

    format!(
        "{:>5} {:10} {:7} {:16} {:>14}{}",
        entry.id.to_string(),
        entry.date.format(date_format).to_string(),
        entry.kind,
        truncate(&entry.category, 16),
        signed.format_with_symbol(symbol),
        description
    )
}

/// Format a list of entries as a register, with a totals footer
pub fn format_entry_register<'a, I>(entries: I, symbol: &str, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut output = String::new();
    let mut count = 0usize;
    let mut net = Money::zero();

    for entry in entries {
        if count == 0 {
            output.push_str(&format!(
                "{:>5} {:10} {:7} {:16} {:>14} {}\n",
                "ID", "Date", "Kind", "Category", "Amount", "Description"
            ));
            output.push_str(&"-".repeat(70));
            output.push('\n');
        }
        count += 1;
        net += match entry.kind {
            EntryKind::Income => entry.amount,
            EntryKind::Expense => -entry.amount,
        };
        output.push_str(&format_entry_row(entry, symbol, date_format));
        output.push('\n');
    }

    if count == 0 {
        return "No entries found.\n".to_string();
    }

    output.push_str(&"-".repeat(70));
    output.push('\n');
    output.push_str(&format!(
        "{} {}, net {}\n",
        count,
        if count == 1 { "entry" } else { "entries" },
        net.format_with_symbol(symbol)
    ));

    output
}

/// Format entry details for display
pub fn format_entry_details(entry: &Entry, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:       {}\n", entry.id));
    output.push_str(&format!("Date:        {}\n", entry.date.format("%Y-%m-%d")));
    output.push_str(&format!("Kind:        {}\n", entry.kind));
    output.push_str(&format!("Amount:      {}\n", entry.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", entry.category));
    if !entry.description.is_empty() {
        output.push_str(&format!("Description: {}\n", entry.description));
    }

    output
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
    use crate::models::EntryId;
    use chrono::NaiveDate;

    fn rent() -> Entry {
        Entry {
            id: EntryId::new(2),
            kind: EntryKind::Expense,
            amount: Money::from_units(300),
            category: "rent".into(),
            description: "Flat".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }

    #[test]
    fn test_row_shows_expense_as_negative() {
        let row = format_entry_row(&rent(), "$", "%Y-%m-%d");
        assert!(row.contains("#2"));
        assert!(row.contains("2024-01-10"));
        assert!(row.contains("-$300.00"));
        assert!(row.ends_with(" Flat"));
    }

    #[test]
    fn test_row_uses_date_format() {
        let row = format_entry_row(&rent(), "$", "%d/%m/%Y");
        assert!(row.contains("10/01/2024"));
    }

    #[test]
    fn test_register_footer() {
        let entries = vec![rent()];
        let register = format_entry_register(&entries, "€", "%Y-%m-%d");
        assert!(register.starts_with("   ID"));
        assert!(register.contains("1 entry, net -€300.00"));
    }

    #[test]
    fn test_empty_register() {
        let entries: Vec<Entry> = Vec::new();
        assert_eq!(format_entry_register(&entries, "$", "%Y-%m-%d"), "No entries found.\n");
    }

    #[test]
    fn test_details() {
        let details = format_entry_details(&rent(), "$");
        assert!(details.contains("Entry:       #2"));
        assert!(details.contains("Amount:      $300.00"));
        assert!(details.contains("Description: Flat"));
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("café", 4), "café");
        assert_eq!(truncate("groceries and more", 10), "groceri...");
    }
}
