//! Greedy team balancing.
//!
//! Players are placed strongest first, each onto whichever team currently
//! has the lowest total ability score. This is a heuristic: it keeps team
//! totals close in `O(n log n + n * m)` but does not search for the
//! optimal split.

use super::player::{by_ability_descending, Player};
use super::roster::League;
use super::team::Team;
use crate::error::{Result, RosterError};
use std::cmp::Ordering;
use tracing::info;

/// Lowest total ability score first, then the smaller roster, then name.
fn by_lowest_score(a: &Team, b: &Team) -> Ordering {
    a.total_ability_score()
        .total_cmp(&b.total_ability_score())
        .then_with(|| a.len().cmp(&b.len()))
        .then_with(|| a.name().cmp(b.name()))
}

/// Redistribute the whole pool across the existing teams, ignoring any
/// previous assignment, then mark every pool player drafted.
///
/// Roster capacity is not enforced here; every pool player is placed.
pub fn optimize_teams(league: &mut League) -> Result<()> {
    if league.teams().next().is_none() {
        return Err(RosterError::NoTeams);
    }

    let mut order: Vec<Player> = league.pool().to_vec();
    order.sort_by(by_ability_descending);

    let mut teams: Vec<&mut Team> = league.teams_mut().collect();
    for team in teams.iter_mut() {
        team.clear();
    }
    for mut player in order {
        player.set_drafted();
        if let Some(team) = teams.iter_mut().min_by(|a, b| by_lowest_score(a, b)) {
            team.add_player(player);
        }
    }
    let totals: Vec<String> = teams
        .iter()
        .map(|team| format!("{}={}", team.name(), team.total_ability_score()))
        .collect();

    for player in league.pool_mut() {
        player.set_drafted();
    }
    info!(totals = %totals.join(", "), "teams optimized");
    Ok(())
}
