//! Book rating on the 1–10 scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// A book rating between 1 and 10 inclusive.
///
/// Ratings are entered on a 10-point scale but displayed on a 5-star
/// scale (rating / 2), so odd ratings render a half star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

/// Minimum allowed rating value.
pub const MIN_RATING: u8 = 1;
/// Maximum allowed rating value.
pub const MAX_RATING: u8 = 10;

/// Star breakdown of a rating on the 5-star display scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars {
    /// Number of full stars (0..=5).
    pub full: u8,
    /// Whether a half star follows the full stars.
    pub half: bool,
    /// Number of empty stars padding out to 5.
    pub empty: u8,
}

impl Rating {
    /// Creates a rating, rejecting values outside 1..=10.
    pub fn new(value: u8) -> crate::Result<Self> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::validation_field(
                "rating",
                format!("must be between {MIN_RATING} and {MAX_RATING}, got {value}"),
            ))
        }
    }

    /// Returns the raw 1–10 value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Converts to the 5-star display breakdown.
    pub fn stars(&self) -> Stars {
        let full = self.0 / 2;
        let half = self.0 % 2 != 0;
        Stars {
            full,
            half,
            empty: 5 - full - u8::from(half),
        }
    }
}

impl Default for Rating {
    /// A middling 5 when no rating is given.
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> crate::Result<Self> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::str::FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let value: u8 = s
            .parse()
            .map_err(|_| Error::validation_field("rating", format!("not a number: '{s}'")))?;
        Self::new(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(10).is_ok());
        assert!(Rating::new(11).is_err());
    }

    #[test]
    fn test_default_is_five() {
        assert_eq!(Rating::default().value(), 5);
    }

    #[test]
    fn test_stars_even() {
        let stars = Rating::new(8).unwrap().stars();
        assert_eq!(stars, Stars { full: 4, half: false, empty: 1 });
    }

    #[test]
    fn test_stars_odd_has_half() {
        let stars = Rating::new(7).unwrap().stars();
        assert_eq!(stars, Stars { full: 3, half: true, empty: 1 });
    }

    #[test]
    fn test_stars_extremes() {
        assert_eq!(
            Rating::new(10).unwrap().stars(),
            Stars { full: 5, half: false, empty: 0 }
        );
        assert_eq!(
            Rating::new(1).unwrap().stars(),
            Stars { full: 0, half: true, empty: 4 }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::new(7).unwrap().to_string(), "7/10");
    }

    #[test]
    fn test_serde_as_number() {
        let rating = Rating::new(9).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "9");
        let parsed: Rating = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, rating);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("0").is_err());
        assert!(serde_json::from_str::<Rating>("11").is_err());
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("6".parse::<Rating>().unwrap().value(), 6);
        assert!("eleven".parse::<Rating>().is_err());
    }
}
