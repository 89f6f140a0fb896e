//! The default player pool and the fairness calibration derived from it.

use super::player::{by_ability_descending, Player};
use crate::cli::types::Height;
use crate::config::DEFAULT_MAX_PLAYERS_PER_TEAM;

const SEED_PLAYERS: &[(&str, &str, u32, bool)] = &[
    ("Joe", "Smith", 42, true),
    ("Jill", "Tanner", 36, true),
    ("Bill", "Bon", 43, true),
    ("Eva", "Gordon", 45, false),
    ("Matt", "Gill", 40, false),
    ("Kimmy", "Stein", 41, false),
    ("Sammy", "Adams", 45, false),
    ("Karl", "Saygan", 42, true),
    ("Suzane", "Greenberg", 44, true),
    ("Sal", "Dali", 41, false),
    ("Joe", "Kavalier", 39, false),
    ("Ben", "Finkelstein", 44, false),
    ("Diego", "Soto", 41, true),
    ("Chloe", "Alaska", 47, false),
    ("Arfalseld", "Willis", 43, false),
    ("Phillip", "Helm", 44, true),
    ("Les", "Clay", 42, true),
    ("Herschel", "Krustofski", 45, true),
    ("Andrew", "Chalklerz", 42, true),
    ("Pasan", "Membrane", 36, true),
    ("Kenny", "Lovins", 35, true),
    ("Alena", "Sketchings", 45, false),
    ("Carling", "Seacharpet", 40, false),
    ("Joseph", "Freely", 41, false),
    ("Gabe", "Listmaker", 45, false),
    ("Jeremy", "Smith", 42, true),
    ("Ben", "Droid", 44, true),
    ("James", "Dothnette", 41, false),
    ("Nick", "Grande", 39, false),
    ("Will", "Guyam", 44, false),
    ("Jason", "Seaver", 41, true),
    ("Johnny", "Thunder", 47, false),
    ("Ryan", "Creedson", 43, false),
];

/// The fixed starting roster, in sign-up order, nobody drafted.
pub fn seed_players() -> Vec<Player> {
    let players: Vec<Player> = SEED_PLAYERS
        .iter()
        .filter_map(|&(first, last, inches, experienced)| {
            Height::new(inches)
                .ok()
                .map(|height| Player::new(first, last, height, experienced))
        })
        .collect();
    debug_assert_eq!(players.len(), SEED_PLAYERS.len(), "seed heights must be positive");
    players
}

/// Widest gap expected between two full teams' average ability scores.
///
/// Mean score of the strongest eleven seed players minus the mean of the
/// weakest eleven. Always computed from the seed roster, never the live
/// pool, so fairness percentages stay comparable across resets.
pub fn high_discrepancy() -> f64 {
    let mut sorted = seed_players();
    sorted.sort_by(by_ability_descending);

    let n = DEFAULT_MAX_PLAYERS_PER_TEAM.min(sorted.len());
    if n == 0 {
        return 0.0;
    }
    let mean = |players: &[Player]| {
        players.iter().map(Player::ability_score).sum::<f64>() / players.len() as f64
    };
    mean(&sorted[..n]) - mean(&sorted[sorted.len() - n..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_roster() {
        let players = seed_players();
        assert_eq!(players.len(), 33);
        assert_eq!(players[0].to_string(), "Joe Smith");
        assert_eq!(players[32].to_string(), "Ryan Creedson");
        assert!(players.iter().all(|p| !p.is_drafted()));

        let unique: HashSet<&Player> = players.iter().collect();
        assert_eq!(unique.len(), players.len());
    }

    #[test]
    fn test_every_seed_entry_becomes_a_player() {
        assert!(SEED_PLAYERS.iter().all(|&(_, _, inches, _)| inches > 0));
        let players = seed_players();
        assert_eq!(players.len(), SEED_PLAYERS.len());
        for (player, &(first, last, inches, experienced)) in players.iter().zip(SEED_PLAYERS) {
            assert_eq!(player.first_name(), first);
            assert_eq!(player.last_name(), last);
            assert_eq!(player.height().inches(), inches);
            assert_eq!(player.has_previous_experience(), experienced);
        }
    }

    #[test]
    fn test_seed_experience_split() {
        let experienced = seed_players()
            .iter()
            .filter(|p| p.has_previous_experience())
            .count();
        assert_eq!(experienced, 15);
    }

    #[test]
    fn test_high_discrepancy() {
        // top eleven: 471" + 11 * 100 bonus, bottom eleven: 452"
        let expected = 1119.0 / 11.0;
        assert!((high_discrepancy() - expected).abs() < 1e-9);
    }
}
