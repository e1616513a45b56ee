//! # Weight Class
//!
//! NMFC freight classes accepted by the quoting service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 18 accepted freight classes.
///
/// # Examples
///
/// ```
/// use freightquote::domain::value_objects::WeightClass;
///
/// assert!(WeightClass::from_number(77.5).is_some());
/// assert!(WeightClass::from_number(75.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightClass(f64);

impl WeightClass {
    /// Every accepted class, lowest first.
    pub const ALL: [f64; 18] = [
        50.0, 55.0, 60.0, 65.0, 70.0, 77.5, 85.0, 92.5, 100.0, 110.0, 125.0, 150.0, 175.0, 200.0,
        250.0, 300.0, 400.0, 500.0,
    ];

    /// Returns the class if `value` is one of the accepted classes.
    #[must_use]
    pub fn from_number(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| *class == value)
            .map(Self)
    }

    /// Returns the numeric class.
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_classes() {
        assert_eq!(WeightClass::ALL.len(), 18);
        assert!(WeightClass::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn integral_and_fractional_classes() {
        assert_eq!(WeightClass::from_number(50.0).map(WeightClass::value), Some(50.0));
        assert_eq!(WeightClass::from_number(92.5).map(|c| c.to_string()), Some("92.5".into()));
        assert!(WeightClass::from_number(0.0).is_none());
        assert!(WeightClass::from_number(600.0).is_none());
    }
}
