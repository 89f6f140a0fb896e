//! Player height in inches.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a player's height in inches.
///
/// Heights are always positive; construct through [`Height::new`] or parse
/// from a string to get that check.
///
/// # Examples
///
/// ```rust
/// use soccer_league::Height;
///
/// let height: Height = "42".parse().unwrap();
/// assert_eq!(height.inches(), 42);
/// assert_eq!(height.feet_and_inches(), "3' 6\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Height(u32);

impl Height {
    /// Create a height, rejecting zero.
    pub fn new(inches: u32) -> Result<Self> {
        if inches == 0 {
            return Err(RosterError::InvalidHeight {
                value: inches.to_string(),
            });
        }
        Ok(Self(inches))
    }

    pub fn inches(&self) -> u32 {
        self.0
    }

    /// Render as feet and inches, e.g. `3' 6"`.
    pub fn feet_and_inches(&self) -> String {
        format!("{}' {}\"", self.0 / 12, self.0 % 12)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Height {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let inches = s.trim().parse::<u32>().map_err(|_| RosterError::InvalidHeight {
            value: s.to_string(),
        })?;
        Self::new(inches)
    }
}

impl TryFrom<u32> for Height {
    type Error = RosterError;

    fn try_from(inches: u32) -> Result<Self> {
        Self::new(inches)
    }
}

impl From<Height> for u32 {
    fn from(height: Height) -> Self {
        height.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_parse() {
        let height: Height = "45".parse().unwrap();
        assert_eq!(height.inches(), 45);

        let padded: Height = " 39 ".parse().unwrap();
        assert_eq!(padded.inches(), 39);
    }

    #[test]
    fn test_height_rejects_zero_and_garbage() {
        assert!(matches!(
            "0".parse::<Height>(),
            Err(RosterError::InvalidHeight { .. })
        ));
        assert!(matches!(
            "-4".parse::<Height>(),
            Err(RosterError::InvalidHeight { .. })
        ));
        assert!(matches!(
            "tall".parse::<Height>(),
            Err(RosterError::InvalidHeight { .. })
        ));
    }

    #[test]
    fn test_feet_and_inches() {
        assert_eq!(Height::new(47).unwrap().feet_and_inches(), "3' 11\"");
        assert_eq!(Height::new(36).unwrap().feet_and_inches(), "3' 0\"");
    }

    #[test]
    fn test_height_serde_rejects_zero() {
        let json = serde_json::to_string(&Height::new(40).unwrap()).unwrap();
        assert_eq!(json, "40");
        assert!(serde_json::from_str::<Height>("0").is_err());
    }
}
