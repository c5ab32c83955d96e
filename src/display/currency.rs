//! Currency symbols for terminal output

use crate::models::{Currency, Money};

/// Symbol printed in front of amounts in `currency`
pub fn symbol(currency: Currency) -> &'static str {
    match currency {
        Currency::USD => "$",
        Currency::EUR => "€",
        Currency::GBP => "£",
        Currency::JPY => "¥",
        Currency::CAD => "C$",
        Currency::AUD => "A$",
        Currency::CHF => "Fr",
        Currency::CNY => "¥",
        Currency::INR => "₹",
        Currency::BRL => "R$",
        Currency::RUB => "₽",
        Currency::KRW => "₩",
        Currency::SEK | Currency::NOK | Currency::DKK => "kr",
        Currency::PLN => "zł",
        Currency::CZK => "Kč",
        Currency::HUF => "Ft",
        Currency::BGN => "лв",
        Currency::RON => "lei",
    }
}

/// Format an amount with the symbol of `currency`
pub fn format_amount(amount: Money, currency: Currency) -> String {
    amount.format_with_symbol(symbol(currency))
}

/// One line per supported currency, e.g. "EUR  €"
pub fn format_currency_list(current: Currency) -> String {
    let mut output = String::new();
    for currency in Currency::ALL {
        let marker = if *currency == current { "*" } else { " " };
        output.push_str(&format!("{} {:<4} {}\n", marker, currency, symbol(*currency)));
    }
    output
}
