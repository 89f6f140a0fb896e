//! A named team and the statistics derived from its roster.

use super::player::Player;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A team with its coach and current roster.
///
/// The roster is a set in player natural order, so iteration is
/// deterministic and adding a player twice is a no-op.
#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    coach: String,
    players: BTreeSet<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, coach: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coach: coach.into(),
            players: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coach(&self) -> &str {
        &self.coach
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.players.contains(player)
    }

    /// Returns `false` when the player was already on the roster.
    pub fn add_player(&mut self, player: Player) -> bool {
        self.players.insert(player)
    }

    /// Returns `false` when the player was not on the roster.
    pub fn remove_player(&mut self, player: &Player) -> bool {
        self.players.remove(player)
    }

    pub(crate) fn clear(&mut self) {
        self.players.clear();
    }

    /// Mean height in inches, `None` for an empty roster.
    pub fn average_height(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let total: u32 = self.players.iter().map(|p| p.height().inches()).sum();
        Some(f64::from(total) / self.players.len() as f64)
    }

    /// Number of players with previous experience.
    pub fn total_experience(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.has_previous_experience())
            .count()
    }

    /// Fraction of the roster with previous experience, in `0.0..=1.0`.
    pub fn average_experience(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        self.total_experience() as f64 / self.players.len() as f64
    }

    pub fn total_ability_score(&self) -> f64 {
        self.players.iter().map(Player::ability_score).sum()
    }

    pub fn average_ability_score(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        self.total_ability_score() / self.players.len() as f64
    }

    /// Number of players at each height, shortest first.
    pub fn height_distribution(&self) -> BTreeMap<u32, usize> {
        let mut distribution = BTreeMap::new();
        for player in &self.players {
            *distribution.entry(player.height().inches()).or_insert(0) += 1;
        }
        distribution
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::Height;

    fn player(first: &str, last: &str, inches: u32, experienced: bool) -> Player {
        Player::new(first, last, Height::new(inches).unwrap(), experienced)
    }

    fn sharks() -> Team {
        let mut team = Team::new("Sharks", "Coach Carter");
        team.add_player(player("Joe", "Smith", 42, true));
        team.add_player(player("Jill", "Tanner", 36, true));
        team.add_player(player("Eva", "Gordon", 45, false));
        team.add_player(player("Matt", "Gill", 40, false));
        team
    }

    #[test]
    fn test_empty_team_stats() {
        let team = Team::new("Sharks", "Coach Carter");
        assert!(team.is_empty());
        assert_eq!(team.average_height(), None);
        assert_eq!(team.total_experience(), 0);
        assert_eq!(team.average_experience(), 0.0);
        assert_eq!(team.total_ability_score(), 0.0);
        assert_eq!(team.average_ability_score(), 0.0);
        assert!(team.height_distribution().is_empty());
    }

    #[test]
    fn test_team_stats() {
        let team = sharks();
        assert_eq!(team.len(), 4);
        assert_eq!(team.average_height(), Some(40.75));
        assert_eq!(team.total_experience(), 2);
        assert_eq!(team.average_experience(), 0.5);
        assert_eq!(team.total_ability_score(), 363.0);
        assert_eq!(team.average_ability_score(), 90.75);
    }

    #[test]
    fn test_average_ability_is_height_plus_experience_percent() {
        let team = sharks();
        let composite = team.average_height().unwrap() + team.average_experience() * 100.0;
        assert!((team.average_ability_score() - composite).abs() < 1e-9);
    }

    #[test]
    fn test_add_and_remove_are_set_like() {
        let mut team = sharks();
        assert!(!team.add_player(player("Joe", "Smith", 42, true)));
        assert_eq!(team.len(), 4);

        assert!(!team.remove_player(&player("Nick", "Grande", 39, false)));
        assert_eq!(team.len(), 4);

        assert!(team.remove_player(&player("Joe", "Smith", 42, true)));
        assert_eq!(team.len(), 3);
    }

    #[test]
    fn test_roster_iterates_in_natural_order() {
        let names: Vec<String> = sharks().players().map(|p| p.to_string()).collect();
        assert_eq!(
            names,
            vec!["Matt Gill", "Eva Gordon", "Joe Smith", "Jill Tanner"]
        );
    }

    #[test]
    fn test_height_distribution() {
        let mut team = sharks();
        team.add_player(player("Carling", "Seacharpet", 40, false));

        let distribution = team.height_distribution();
        let buckets: Vec<(u32, usize)> = distribution.into_iter().collect();
        assert_eq!(buckets, vec![(36, 1), (40, 2), (42, 1), (45, 1)]);
    }
}
