//! Pick-by-number identifiers.

use crate::error::{Result, RosterError};
use std::fmt;
use std::str::FromStr;

/// One-based position of a player in the league pool, as shown by
/// `player list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerNumber(usize);

impl PlayerNumber {
    pub fn new(number: usize) -> Self {
        Self(number)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// Zero-based pool index, or `None` for player #0.
    pub fn index(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerNumber {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| RosterError::PlayerNotFound {
                name: format!("#{}", s),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_number_index() {
        assert_eq!(PlayerNumber::new(1).index(), Some(0));
        assert_eq!(PlayerNumber::new(0).index(), None);
    }

    #[test]
    fn test_player_number_parse() {
        let number: PlayerNumber = "12".parse().unwrap();
        assert_eq!(number.as_usize(), 12);
        assert!("twelve".parse::<PlayerNumber>().is_err());
    }
}
