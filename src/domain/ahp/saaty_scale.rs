//! Saaty fundamental scale for pairwise judgments (1 to 9).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Intensity of importance of one item over another.
///
/// The reciprocal of an intensity expresses the opposite preference, so
/// "B is strongly less important than A" is `Strong.reciprocal()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SaatyScale {
    #[default]
    Equal = 1,
    WeakModerate = 2,
    Moderate = 3,
    ModeratePlus = 4,
    Strong = 5,
    StrongPlus = 6,
    VeryStrong = 7,
    VeryVeryStrong = 8,
    Extreme = 9,
}

impl SaatyScale {
    /// All intensities in ascending order.
    pub const ALL: [SaatyScale; 9] = [
        SaatyScale::Equal,
        SaatyScale::WeakModerate,
        SaatyScale::Moderate,
        SaatyScale::ModeratePlus,
        SaatyScale::Strong,
        SaatyScale::StrongPlus,
        SaatyScale::VeryStrong,
        SaatyScale::VeryVeryStrong,
        SaatyScale::Extreme,
    ];

    /// Returns the judgment value (1.0 to 9.0).
    pub fn value(&self) -> f64 {
        f64::from(*self as u8)
    }

    /// Returns the judgment value for the inverse preference (1/9 to 1).
    pub fn reciprocal(&self) -> f64 {
        1.0 / self.value()
    }

    /// Maps an integer judgment back onto the scale.
    ///
    /// Returns `None` for anything that is not a whole number in 1..=9.
    pub fn from_value(value: f64) -> Option<Self> {
        if value.fract() != 0.0 {
            return None;
        }
        Self::ALL.iter().copied().find(|s| s.value() == value)
    }

    /// Returns the verbal label shown next to dashboard sliders.
    pub fn label(&self) -> &'static str {
        match self {
            SaatyScale::Equal => "Equal importance",
            SaatyScale::WeakModerate => "Weak",
            SaatyScale::Moderate => "Moderate importance",
            SaatyScale::ModeratePlus => "Moderate plus",
            SaatyScale::Strong => "Strong importance",
            SaatyScale::StrongPlus => "Strong plus",
            SaatyScale::VeryStrong => "Very strong importance",
            SaatyScale::VeryVeryStrong => "Very, very strong",
            SaatyScale::Extreme => "Extreme importance",
        }
    }
}

impl fmt::Display for SaatyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_span_one_to_nine() {
        assert_eq!(SaatyScale::Equal.value(), 1.0);
        assert_eq!(SaatyScale::Moderate.value(), 3.0);
        assert_eq!(SaatyScale::Extreme.value(), 9.0);
    }

    #[test]
    fn reciprocal_inverts_value() {
        assert!((SaatyScale::Strong.reciprocal() - 0.2).abs() < 1e-12);
        assert_eq!(SaatyScale::Equal.reciprocal(), 1.0);
    }

    #[test]
    fn from_value_accepts_whole_numbers_only() {
        assert_eq!(SaatyScale::from_value(7.0), Some(SaatyScale::VeryStrong));
        assert_eq!(SaatyScale::from_value(2.5), None);
        assert_eq!(SaatyScale::from_value(10.0), None);
        assert_eq!(SaatyScale::from_value(0.0), None);
    }

    #[test]
    fn display_shows_number() {
        assert_eq!(format!("{}", SaatyScale::VeryStrong), "7");
    }
}
