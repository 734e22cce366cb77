//! # Money
//!
//! Amounts are kept in minor units (centavos) so totals are integer sums.
//! A single fixed locale convention governs parsing and display: thousands
//! separator `.`, decimal separator `,`, symbol prefix (`R$ 1.234,56`).

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Monetary amount in the smallest currency unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create from minor units (centavos)
    pub fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Amount in minor units
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Multiply by a quantity, saturating at the i64 bounds
    pub fn times(self, quantity: u32) -> Self {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Raw price as it arrives from the page: either locale text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl From<&str> for PriceInput {
    fn from(s: &str) -> Self {
        PriceInput::Text(s.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(s: String) -> Self {
        PriceInput::Text(s)
    }
}

impl From<f64> for PriceInput {
    fn from(n: f64) -> Self {
        PriceInput::Number(n)
    }
}

impl From<i32> for PriceInput {
    fn from(n: i32) -> Self {
        PriceInput::Number(f64::from(n))
    }
}

impl std::fmt::Display for PriceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceInput::Number(n) => write!(f, "{}", n),
            PriceInput::Text(s) => f.write_str(s),
        }
    }
}

/// Locale convention for parsing and displaying amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    /// Currency symbol placed before the amount
    pub symbol: String,
    /// Text between the symbol and the digits
    pub separator: String,
    /// Digit group separator
    pub thousands: char,
    /// Decimal separator
    pub decimal: char,
    /// Number of minor-unit digits
    pub decimals: u8,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            separator: "\u{a0}".to_string(),
            thousands: '.',
            decimal: ',',
            decimals: 2,
        }
    }
}

impl MoneyFormat {
    /// Largest supported `decimals` value
    pub const MAX_DECIMALS: u8 = 6;

    /// Reject conventions that cannot round-trip
    pub fn validate(&self) -> CartResult<()> {
        if self.thousands == self.decimal {
            return Err(CartError::Config(format!(
                "thousands and decimal separators are both {:?}",
                self.decimal
            )));
        }
        if self.decimals > Self::MAX_DECIMALS {
            return Err(CartError::Config(format!(
                "decimals must be at most {}, got {}",
                Self::MAX_DECIMALS,
                self.decimals
            )));
        }
        Ok(())
    }

    fn scale(&self) -> i64 {
        10_i64.pow(u32::from(self.decimals.min(Self::MAX_DECIMALS)))
    }

    /// Convert a decimal amount to minor units, rejecting negative,
    /// non-finite and overflowing values
    pub fn to_minor(&self, amount: f64) -> Option<Money> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let scaled = (amount * self.scale() as f64).round();
        if scaled >= i64::MAX as f64 {
            return None;
        }
        Some(Money(scaled as i64))
    }

    /// Parse locale text such as `"1.234,56"`.
    ///
    /// Every thousands separator is dropped and the first decimal separator
    /// becomes the decimal point; the remainder must be a plain decimal
    /// number (sign and exponent allowed).
    pub fn parse(&self, text: &str) -> CartResult<Money> {
        let invalid = || CartError::InvalidPrice {
            input: text.to_string(),
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut normalized = String::with_capacity(trimmed.len());
        let mut seen_decimal = false;
        for c in trimmed.chars() {
            if c == self.thousands {
                continue;
            }
            if c == self.decimal && !seen_decimal {
                seen_decimal = true;
                normalized.push('.');
            } else {
                normalized.push(c);
            }
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        {
            return Err(invalid());
        }

        let amount: f64 = normalized.parse().map_err(|_| invalid())?;
        self.to_minor(amount).ok_or_else(invalid)
    }

    /// Resolve a page-supplied price
    pub fn parse_input(&self, input: &PriceInput) -> CartResult<Money> {
        match input {
            PriceInput::Text(text) => self.parse(text),
            PriceInput::Number(n) => self.to_minor(*n).ok_or_else(|| CartError::InvalidPrice {
                input: input.to_string(),
            }),
        }
    }

    /// Format for display (e.g. `R$ 1.234,56`)
    pub fn format(&self, money: Money) -> String {
        let scale = self.scale().unsigned_abs();
        let abs = money.0.unsigned_abs();
        let whole = abs / scale;
        let frac = abs % scale;

        let mut out = String::new();
        if money.0 < 0 {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&self.separator);
        out.push_str(&group_digits(whole, self.thousands));
        if self.decimals > 0 {
            out.push(self.decimal);
            out.push_str(&format!(
                "{:0width$}",
                frac,
                width = usize::from(self.decimals.min(Self::MAX_DECIMALS))
            ));
        }
        out
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl() -> MoneyFormat {
        MoneyFormat::default()
    }

    #[test]
    fn test_parse_locale_text() {
        let f = brl();
        assert_eq!(f.parse("10,50").unwrap(), Money::from_minor(1050));
        assert_eq!(f.parse("1.234,56").unwrap(), Money::from_minor(123456));
        assert_eq!(f.parse(" 25 ").unwrap(), Money::from_minor(2500));
        assert_eq!(f.parse("0,005").unwrap(), Money::from_minor(1));
        // a dot is always a thousands separator in this locale
        assert_eq!(f.parse("25.00").unwrap(), Money::from_minor(250000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let f = brl();
        for bad in ["", "   ", "abc", "12,x", "R$ 10,00", "-1,00", "inf", "NaN", "1,2,3"] {
            assert!(
                matches!(f.parse(bad), Err(CartError::InvalidPrice { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_numbers() {
        let f = brl();
        assert_eq!(f.parse_input(&PriceInput::from(25)).unwrap(), Money::from_minor(2500));
        assert_eq!(
            f.parse_input(&PriceInput::Number(19.99)).unwrap(),
            Money::from_minor(1999)
        );
        assert!(f.parse_input(&PriceInput::Number(f64::NAN)).is_err());
        assert!(f.parse_input(&PriceInput::Number(-3.0)).is_err());
    }

    #[test]
    fn test_format() {
        let f = brl();
        assert_eq!(f.format(Money::ZERO), "R$\u{a0}0,00");
        assert_eq!(f.format(Money::from_minor(5000)), "R$\u{a0}50,00");
        assert_eq!(f.format(Money::from_minor(123456789)), "R$\u{a0}1.234.567,89");
        assert_eq!(f.format(Money::from_minor(-150)), "-R$\u{a0}1,50");
    }

    #[test]
    fn test_format_without_decimals() {
        let f = MoneyFormat {
            symbol: "¥".into(),
            separator: String::new(),
            thousands: ',',
            decimal: '.',
            decimals: 0,
        };
        assert_eq!(f.format(Money::from_minor(1500)), "¥1,500");
        assert_eq!(f.parse("1,500").unwrap(), Money::from_minor(1500));
    }

    #[test]
    fn test_validate() {
        assert!(brl().validate().is_ok());
        let clash = MoneyFormat {
            thousands: ',',
            ..brl()
        };
        assert!(matches!(clash.validate(), Err(CartError::Config(_))));
        let too_precise = MoneyFormat {
            decimals: 9,
            ..brl()
        };
        assert!(too_precise.validate().is_err());
    }

    #[test]
    fn test_money_arithmetic() {
        let total: Money = [Money::from_minor(1050), Money::from_minor(1050).times(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_minor(3150));
        assert_eq!(Money::from_minor(i64::MAX).times(2), Money::from_minor(i64::MAX));
    }
}
