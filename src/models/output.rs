//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::league::{League, Player, Team};

/// A pool or waiting-list player with their pick-by-number position.
#[derive(Debug, Serialize)]
pub struct PlayerView {
    /// One-based list number.
    pub number: usize,
    pub first_name: String,
    pub last_name: String,
    pub height_in_inches: u32,
    pub previous_experience: bool,
    pub drafted: bool,
    /// Team the player is on, if any.
    pub team: Option<String>,
    pub ability_score: f64,
}

impl PlayerView {
    pub fn new(number: usize, player: &Player, team: Option<&Team>) -> Self {
        Self {
            number,
            first_name: player.first_name().to_string(),
            last_name: player.last_name().to_string(),
            height_in_inches: player.height().inches(),
            previous_experience: player.has_previous_experience(),
            drafted: player.is_drafted(),
            team: team.map(|t| t.name().to_string()),
            ability_score: player.ability_score(),
        }
    }

    /// Every pool player, numbered in pool order.
    pub fn pool(league: &League) -> Vec<Self> {
        league
            .pool()
            .iter()
            .enumerate()
            .map(|(i, p)| Self::new(i + 1, p, league.team_of(p)))
            .collect()
    }
}

/// Team summary with its roster in natural order.
#[derive(Debug, Serialize)]
pub struct TeamView {
    pub name: String,
    pub coach: String,
    pub players: Vec<PlayerView>,
    pub average_height_inches: Option<f64>,
    pub experienced_players: usize,
    pub total_ability_score: f64,
}

impl TeamView {
    pub fn new(team: &Team) -> Self {
        Self {
            name: team.name().to_string(),
            coach: team.coach().to_string(),
            players: team
                .players()
                .enumerate()
                .map(|(i, p)| PlayerView::new(i + 1, p, Some(team)))
                .collect(),
            average_height_inches: team.average_height(),
            experienced_players: team.total_experience(),
            total_ability_score: team.total_ability_score(),
        }
    }
}

/// Players at one height.
#[derive(Debug, Serialize)]
pub struct HeightBucket {
    pub height_in_inches: u32,
    pub players: usize,
}
