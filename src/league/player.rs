//! A youth league player and their ability score.

use crate::cli::types::Height;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Points added to an experienced player's ability score.
///
/// Height is measured in inches and experience is worth a full 100, so a
/// team's mean ability score equals its average height plus the percentage
/// of its players with previous experience.
pub const EXPERIENCE_BONUS: f64 = 100.0;

/// A player in the league pool.
///
/// Identity is `(first_name, last_name, height, previous_experience)`; the
/// `drafted` flag is state and does not take part in equality, ordering or
/// hashing.
#[derive(Debug, Clone)]
pub struct Player {
    first_name: String,
    last_name: String,
    height: Height,
    previous_experience: bool,
    drafted: bool,
}

impl Player {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        height: Height,
        previous_experience: bool,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            height,
            previous_experience,
            drafted: false,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn has_previous_experience(&self) -> bool {
        self.previous_experience
    }

    pub fn is_drafted(&self) -> bool {
        self.drafted
    }

    pub fn set_drafted(&mut self) {
        self.drafted = true;
    }

    pub fn clear_drafted(&mut self) {
        self.drafted = false;
    }

    /// Height in inches plus [`EXPERIENCE_BONUS`] for experienced players.
    pub fn ability_score(&self) -> f64 {
        let bonus = if self.previous_experience {
            EXPERIENCE_BONUS
        } else {
            0.0
        };
        f64::from(self.height.inches()) + bonus
    }

    pub fn height_feet(&self) -> String {
        self.height.feet_and_inches()
    }

    /// Name, height and experience on one line.
    pub fn stats_line(&self) -> String {
        let experience = if self.previous_experience {
            "has previous experience"
        } else {
            "does not have previous experience"
        };
        format!("{}, height: {} ({})", self, self.height_feet(), experience)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first_name.hash(state);
        self.last_name.hash(state);
        self.height.hash(state);
        self.previous_experience.hash(state);
    }
}

impl Ord for Player {
    /// Last name, then first name. Height and experience only separate
    /// players whose names are identical.
    fn cmp(&self, other: &Self) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
            .then_with(|| self.height.cmp(&other.height))
            .then_with(|| self.previous_experience.cmp(&other.previous_experience))
    }
}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Highest ability score first; equal scores fall back to natural order.
pub fn by_ability_descending(a: &Player, b: &Player) -> Ordering {
    b.ability_score()
        .total_cmp(&a.ability_score())
        .then_with(|| a.cmp(b))
}
