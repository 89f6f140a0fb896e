//! Data models for the storage layer

use crate::cli::types::Height;
use crate::league::{Player, Team};
use serde::{Deserialize, Serialize};

/// Current on-disk format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned wrapper around the records of one snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub version: u32,
    pub records: T,
}

impl<T> Snapshot<T> {
    pub fn new(records: T) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records,
        }
    }
}

/// Player as stored in the pool, team and waiting-list snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub first_name: String,
    pub last_name: String,
    pub height_in_inches: Height,
    pub previous_experience: bool,
    #[serde(default)]
    pub drafted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamHeader {
    pub name: String,
    pub coach: String,
}

/// A team and its roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: TeamHeader,
    pub players: Vec<PlayerRecord>,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            first_name: player.first_name().to_string(),
            last_name: player.last_name().to_string(),
            height_in_inches: player.height(),
            previous_experience: player.has_previous_experience(),
            drafted: player.is_drafted(),
        }
    }
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        let mut player = Player::new(
            record.first_name,
            record.last_name,
            record.height_in_inches,
            record.previous_experience,
        );
        if record.drafted {
            player.set_drafted();
        }
        player
    }
}

impl From<&Team> for TeamRecord {
    fn from(team: &Team) -> Self {
        Self {
            team: TeamHeader {
                name: team.name().to_string(),
                coach: team.coach().to_string(),
            },
            players: team.players().map(PlayerRecord::from).collect(),
        }
    }
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        let mut team = Team::new(record.team.name, record.team.coach);
        for player in record.players {
            team.add_player(player.into());
        }
        team
    }
}
