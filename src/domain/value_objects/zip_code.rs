//! # Zip Code
//!
//! US postal code pattern shared by every location entity.

use regex::Regex;
use std::sync::OnceLock;

/// US zip code rule: five digits, optionally followed by `-` and four more.
///
/// # Examples
///
/// ```
/// use freightquote::domain::value_objects::ZipCode;
///
/// assert!(ZipCode::is_valid("46202"));
/// assert!(ZipCode::is_valid("46202-1234"));
/// assert!(!ZipCode::is_valid("462021234"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ZipCode;

impl ZipCode {
    /// Returns true if `zip` is exactly a 5-digit or ZIP+4 code.
    #[must_use]
    pub fn is_valid(zip: &str) -> bool {
        static ZIP_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
        ZIP_REGEX
            .get_or_init(|| Regex::new(r"^(?:[0-9]{5}|[0-9]{5}-[0-9]{4})$"))
            .as_ref()
            .is_ok_and(|regex| regex.is_match(zip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_near_misses() {
        for zip in ["", "4620", "462020", "46202-123", "46202 1234", " 46202", "46202\n", "abcde"] {
            assert!(!ZipCode::is_valid(zip), "{zip:?} should be rejected");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(!ZipCode::is_valid("٤٦٢٠٢"));
    }

    proptest! {
        #[test]
        fn five_digit_codes_are_accepted(zip in "[0-9]{5}") {
            prop_assert!(ZipCode::is_valid(&zip));
        }

        #[test]
        fn zip_plus_four_codes_are_accepted(zip in "[0-9]{5}-[0-9]{4}") {
            prop_assert!(ZipCode::is_valid(&zip));
        }

        #[test]
        fn accepted_iff_pattern_matches(zip in "[0-9-]{0,11}") {
            let bytes = zip.as_bytes();
            let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
            let expected = (bytes.len() == 5 && digits(0..5))
                || (bytes.len() == 10 && digits(0..5) && bytes[5] == b'-' && digits(6..10));
            prop_assert_eq!(ZipCode::is_valid(&zip), expected);
        }
    }
}
