//! # Rate Amount
//!
//! Extraction of the numeric amount from a carrier's rate text.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

/// Numeric amount of a quoted rate such as `"$74.43"`.
///
/// # Examples
///
/// ```
/// use freightquote::domain::value_objects::RateAmount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(RateAmount::parse("$74.43").value(), Decimal::new(7443, 2));
/// assert!(RateAmount::parse("N/A").is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateAmount(Decimal);

impl RateAmount {
    /// Reads the first run of digits (with an optional decimal point) in `text`.
    ///
    /// Text without digits yields zero.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        static AMOUNT_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
        let amount = AMOUNT_REGEX
            .get_or_init(|| Regex::new(r"[0-9]+\.?[0-9]*"))
            .as_ref()
            .ok()
            .and_then(|regex| regex.find(text))
            .and_then(|found| Decimal::from_str(found.as_str().trim_end_matches('.')).ok())
            .unwrap_or(Decimal::ZERO);
        Self(amount)
    }

    /// Returns the amount.
    #[inline]
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}
