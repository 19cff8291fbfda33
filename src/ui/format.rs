//! Price display.

use crate::config::Currency;

/// Renders prices stored in the currency's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    currency: Currency,
}

impl CurrencyFormatter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// `50000` VND → `"50.000 ₫"`, `123456` USD cents → `"$1,234.56"`.
    pub fn format(&self, amount: u128) -> String {
        match self.currency {
            Currency::Vnd => format!("{} ₫", group_thousands(amount, '.')),
            Currency::Usd => format!(
                "${}.{:02}",
                group_thousands(amount / 100, ','),
                amount % 100
            ),
        }
    }
}

fn group_thousands(value: u128, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
