//! Normalized price data and display formatting.

use std::collections::BTreeMap;

/// Currency code to price quote, as produced by normalizing one source's
/// response. Keys are upper-case currency codes; values stay strings until
/// display time since sources disagree on numeric formatting.
pub type PriceMap = BTreeMap<String, String>;

/// Display symbol for the common currencies. Codes outside this table are
/// printed without a symbol.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "GBP" => Some("£"),
        "EUR" => Some("€"),
        "JPY" | "CNY" => Some("¥"),
        "BTC" => Some("₿"),
        _ => None,
    }
}

/// Renders a quote with its currency symbol, thousands separators and two
/// decimal places. Quotes that do not parse as numbers are passed through
/// unchanged after symbol prefixing.
pub fn format_price(currency: &str, price: &str) -> String {
    let symbol = currency_symbol(currency).unwrap_or("");
    // Coindesk rates arrive pre-formatted with separators of their own.
    let cleaned = price.replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(value) => format!("{symbol}{}", group_thousands(value)),
        Err(_) => format!("{symbol}{price}"),
    }
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (number, fraction) = match formatted.split_once('.') {
        Some((number, fraction)) => (number, fraction),
        None => (formatted.as_str(), "00"),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}.{fraction}")
}
