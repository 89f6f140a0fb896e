//! The league session: player pool, teams and waiting list.

use super::player::Player;
use super::seed::{high_discrepancy, seed_players};
use super::team::Team;
use crate::cli::types::PlayerNumber;
use crate::config::LeagueConfig;
use crate::error::{Result, RosterError};
use std::collections::{BTreeMap, HashSet, VecDeque};
use tracing::{debug, info};

/// All mutable league state, owned by a single session.
///
/// Every change goes through the methods here so the league-wide rules
/// hold after each call:
/// - team names are unique and `teams().count() <= max_teams()`;
/// - a pool player is drafted exactly when they are on one team;
/// - a drafted player cannot leave the pool.
#[derive(Debug, Clone)]
pub struct League {
    config: LeagueConfig,
    high_discrepancy: f64,
    pool: Vec<Player>,
    teams: BTreeMap<String, Team>,
    waiting_list: VecDeque<Player>,
}

impl League {
    /// A fresh league with the seed pool, no teams and nobody waiting.
    pub fn new(config: LeagueConfig) -> Self {
        Self::with_pool(config, seed_players())
    }

    /// A league with a custom pool and no teams.
    pub fn with_pool(config: LeagueConfig, pool: Vec<Player>) -> Self {
        Self {
            config,
            high_discrepancy: high_discrepancy(),
            pool,
            teams: BTreeMap::new(),
            waiting_list: VecDeque::new(),
        }
    }

    /// Rebuild a league from restored state, rejecting anything that breaks
    /// the league rules. Drafted flags are recomputed from team membership.
    pub fn from_parts(
        config: LeagueConfig,
        pool: Vec<Player>,
        teams: Vec<Team>,
        waiting_list: Vec<Player>,
    ) -> Result<Self> {
        let mut league = Self::with_pool(config, pool);

        let mut listed = HashSet::new();
        for player in &league.pool {
            if !listed.insert(player.clone()) {
                return Err(RosterError::persistence(format!(
                    "{} appears more than once in the player pool",
                    player
                )));
            }
        }
        for mut player in waiting_list {
            if !listed.insert(player.clone()) {
                return Err(RosterError::persistence(format!(
                    "{} on the waiting list is already listed",
                    player
                )));
            }
            player.clear_drafted();
            league.waiting_list.push_back(player);
        }

        let mut on_a_team = HashSet::new();
        for team in teams {
            for player in team.players() {
                if !league.pool.contains(player) {
                    return Err(RosterError::persistence(format!(
                        "{} on the {} is not in the player pool",
                        player, team
                    )));
                }
                if !on_a_team.insert(player.clone()) {
                    return Err(RosterError::persistence(format!(
                        "{} is on more than one team",
                        player
                    )));
                }
            }
            if league.teams.contains_key(team.name()) {
                return Err(RosterError::persistence(format!(
                    "duplicate team name {}",
                    team
                )));
            }
            league.teams.insert(team.name().to_string(), team);
        }

        for player in &mut league.pool {
            if on_a_team.contains(&*player) {
                player.set_drafted();
            } else {
                player.clear_drafted();
            }
        }
        Ok(league)
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    pub fn high_discrepancy(&self) -> f64 {
        self.high_discrepancy
    }

    pub fn max_teams(&self) -> usize {
        self.config.max_teams(self.pool.len())
    }

    pub fn pool(&self) -> &[Player] {
        &self.pool
    }

    /// Undrafted pool players in natural order.
    pub fn available_players(&self) -> Vec<&Player> {
        let mut available: Vec<&Player> = self.pool.iter().filter(|p| !p.is_drafted()).collect();
        available.sort();
        available
    }

    /// Pick a pool player by their one-based list number.
    pub fn player_at(&self, number: PlayerNumber) -> Result<&Player> {
        number
            .index()
            .and_then(|i| self.pool.get(i))
            .ok_or_else(|| RosterError::InvalidPlayerNumber {
                number: number.as_usize(),
                available: self.pool.len(),
            })
    }

    /// Teams ordered by name.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn team(&self, name: &str) -> Result<&Team> {
        self.teams.get(name).ok_or_else(|| RosterError::UnknownTeam {
            name: name.to_string(),
        })
    }

    /// The team a pool player is on, if any.
    pub fn team_of(&self, player: &Player) -> Option<&Team> {
        self.teams.values().find(|team| team.contains(player))
    }

    pub fn waiting_list(&self) -> impl Iterator<Item = &Player> {
        self.waiting_list.iter()
    }

    pub fn create_team(&mut self, name: &str, coach: &str) -> Result<&Team> {
        if self.teams.contains_key(name) {
            return Err(RosterError::DuplicateTeamName {
                name: name.to_string(),
            });
        }
        let max_teams = self.max_teams();
        if self.teams.len() >= max_teams {
            return Err(RosterError::TeamCapacityExceeded { max_teams });
        }

        info!(team = name, coach, "team created");
        let team = self
            .teams
            .entry(name.to_string())
            .or_insert_with(|| Team::new(name, coach));
        Ok(team)
    }

    pub fn assign_player(&mut self, team_name: &str, player: &Player) -> Result<()> {
        let max_players = self.config.max_players_per_team;
        let slot = self.pool_index(player)?;
        let team = self
            .teams
            .get_mut(team_name)
            .ok_or_else(|| RosterError::UnknownTeam {
                name: team_name.to_string(),
            })?;

        if team.len() >= max_players {
            return Err(RosterError::RosterFull {
                team: team_name.to_string(),
                max_players,
            });
        }
        let pooled = &mut self.pool[slot];
        if pooled.is_drafted() {
            return Err(RosterError::AlreadyDrafted {
                player: pooled.to_string(),
            });
        }

        pooled.set_drafted();
        team.add_player(pooled.clone());
        debug!(team = team_name, player = %pooled, "player assigned");
        Ok(())
    }

    pub fn unassign_player(&mut self, team_name: &str, player: &Player) -> Result<()> {
        let team = self
            .teams
            .get_mut(team_name)
            .ok_or_else(|| RosterError::UnknownTeam {
                name: team_name.to_string(),
            })?;

        if !team.remove_player(player) {
            return Err(RosterError::NotOnRoster {
                player: player.to_string(),
                team: team_name.to_string(),
            });
        }
        if let Some(pooled) = self.pool.iter_mut().find(|p| **p == *player) {
            pooled.clear_drafted();
        }
        debug!(team = team_name, player = %player, "player unassigned");
        Ok(())
    }

    /// Remove an undrafted player from the pool. The head of the waiting
    /// list, if any, takes over the vacated slot and is returned.
    pub fn remove_from_pool(&mut self, player: &Player) -> Result<Option<Player>> {
        let slot = self.pool_index(player)?;
        if self.pool[slot].is_drafted() {
            return Err(RosterError::PlayerIsDrafted {
                player: player.to_string(),
            });
        }

        let replacement = self.waiting_list.pop_front().map(|mut next| {
            next.clear_drafted();
            next
        });
        let removed = match &replacement {
            Some(next) => std::mem::replace(&mut self.pool[slot], next.clone()),
            None => self.pool.remove(slot),
        };
        info!(
            removed = %removed,
            replacement = replacement.as_ref().map(|p| p.to_string()).unwrap_or_default(),
            "player removed from pool"
        );
        Ok(replacement)
    }

    /// Queue a new sign-up. Players already in the pool or waiting are
    /// rejected, since identical players cannot be told apart.
    pub fn enqueue_waiting(&mut self, mut player: Player) -> Result<()> {
        if self.pool.contains(&player) || self.waiting_list.contains(&player) {
            return Err(RosterError::DuplicatePlayer {
                player: player.to_string(),
            });
        }
        player.clear_drafted();
        debug!(player = %player, "added to waiting list");
        self.waiting_list.push_back(player);
        Ok(())
    }

    /// Back to the seed pool with no teams and an empty waiting list.
    pub fn reset(&mut self) {
        self.pool = seed_players();
        self.teams.clear();
        self.waiting_list.clear();
        info!(max_teams = self.max_teams(), "league reset");
    }

    fn pool_index(&self, player: &Player) -> Result<usize> {
        self.pool
            .iter()
            .position(|p| p == player)
            .ok_or_else(|| RosterError::PlayerNotFound {
                name: player.to_string(),
            })
    }

    pub(super) fn pool_mut(&mut self) -> &mut [Player] {
        &mut self.pool
    }

    pub(super) fn teams_mut(&mut self) -> impl Iterator<Item = &mut Team> {
        self.teams.values_mut()
    }
}

impl Default for League {
    fn default() -> Self {
        Self::new(LeagueConfig::default())
    }
}
