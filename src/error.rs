//! Error types for the soccer league roster manager

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("There's already a team named {name}")]
    DuplicateTeamName { name: String },

    #[error("There can only be a max of {max_teams} teams")]
    TeamCapacityExceeded { max_teams: usize },

    #[error("The {team} already have the maximum of {max_players} players")]
    RosterFull { team: String, max_players: usize },

    #[error("{player} is already on a team")]
    AlreadyDrafted { player: String },

    #[error("{player} is not on the {team} roster")]
    NotOnRoster { player: String, team: String },

    #[error("{player} is currently on a team; remove them from their team first")]
    PlayerIsDrafted { player: String },

    #[error("No team named {name}")]
    UnknownTeam { name: String },

    #[error("{player} is already in the player pool or on the waiting list")]
    DuplicatePlayer { player: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Invalid height: {value} (expected a positive number of inches)")]
    InvalidHeight { value: String },

    #[error("There is no player #{number}. There are {available} players to choose from")]
    InvalidPlayerNumber { number: usize, available: usize },

    #[error("Create at least one team before optimizing")]
    NoTeams,

    #[error("Saved league data unavailable: {message}")]
    PersistenceUnavailable { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    pub(crate) fn persistence(message: impl Into<String>) -> Self {
        RosterError::PersistenceUnavailable {
            message: message.into(),
        }
    }
}
