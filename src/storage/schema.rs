//! Snapshot file layout and load/save

use super::models::{PlayerRecord, Snapshot, TeamRecord, SNAPSHOT_VERSION};
use crate::config::LeagueConfig;
use crate::error::{Result, RosterError};
use crate::league::{League, Player, Team};
use dirs::data_dir;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

pub const PLAYERS_FILE: &str = "players.json";
pub const TEAMS_FILE: &str = "teams.json";
pub const WAITING_LIST_FILE: &str = "waiting-list.json";

/// Path: ~/.local/share/soccer-league (or the platform equivalent)
pub fn default_data_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("soccer-league"))
}

/// The three league snapshots in one directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn players_path(&self) -> PathBuf {
        self.dir.join(PLAYERS_FILE)
    }

    pub fn teams_path(&self) -> PathBuf {
        self.dir.join(TEAMS_FILE)
    }

    pub fn waiting_list_path(&self) -> PathBuf {
        self.dir.join(WAITING_LIST_FILE)
    }

    /// Restore the league. Fails when any snapshot is missing, unreadable,
    /// from another format version, or describes an inconsistent league.
    pub fn load(&self, config: LeagueConfig) -> Result<League> {
        let pool: Vec<PlayerRecord> = read_snapshot(&self.players_path())?;
        let teams: Vec<TeamRecord> = read_snapshot(&self.teams_path())?;
        let waiting: Vec<PlayerRecord> = read_snapshot(&self.waiting_list_path())?;

        let league = League::from_parts(
            config,
            pool.into_iter().map(Player::from).collect(),
            teams.into_iter().map(Team::from).collect(),
            waiting.into_iter().map(Player::from).collect(),
        )?;
        debug!(
            dir = %self.dir.display(),
            players = league.pool().len(),
            teams = league.teams().count(),
            "league loaded"
        );
        Ok(league)
    }

    /// Restore the league, or start a fresh one when nothing usable is saved.
    ///
    /// Snapshot files that exist but could not be used are renamed to
    /// `<file>.bak` first, so the next save does not overwrite them.
    pub fn load_or_default(&self, config: LeagueConfig) -> League {
        match self.load(config) {
            Ok(league) => league,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "starting from the default league");
                self.back_up_snapshots();
                League::new(config)
            }
        }
    }

    fn back_up_snapshots(&self) {
        for path in [self.players_path(), self.teams_path(), self.waiting_list_path()] {
            if !path.exists() {
                continue;
            }
            let mut backup = path.clone().into_os_string();
            backup.push(".bak");
            match fs::rename(&path, &backup) {
                Ok(()) => warn!(file = %path.display(), "unusable snapshot kept as backup"),
                Err(e) => warn!(file = %path.display(), error = %e, "could not back up snapshot"),
            }
        }
    }

    /// Write all three snapshots. Every file is staged in the data directory
    /// first, so nothing is replaced unless all three serialized. The renames
    /// that follow are atomic one file at a time only: if one fails part way,
    /// the directory can hold a mix of old and new files. When `load` rejects
    /// that mix, `load_or_default` backs the files up before starting over.
    pub fn save(&self, league: &League) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let pool: Vec<PlayerRecord> = league.pool().iter().map(PlayerRecord::from).collect();
        let teams: Vec<TeamRecord> = league.teams().map(TeamRecord::from).collect();
        let waiting: Vec<PlayerRecord> = league.waiting_list().map(PlayerRecord::from).collect();

        let staged = [
            (self.stage(&pool)?, self.players_path()),
            (self.stage(&teams)?, self.teams_path()),
            (self.stage(&waiting)?, self.waiting_list_path()),
        ];
        for (file, path) in staged {
            file.persist(&path)
                .map_err(|e| RosterError::persistence(format!("{}: {}", path.display(), e)))?;
        }

        info!(dir = %self.dir.display(), "league saved");
        Ok(())
    }

    fn stage<T: Serialize>(&self, records: &T) -> Result<NamedTempFile> {
        let json = serde_json::to_string_pretty(&Snapshot::new(records))?;
        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        Ok(file)
    }
}

fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| RosterError::persistence(format!("{}: {}", path.display(), e)))?;
    let snapshot: Snapshot<T> = serde_json::from_str(&contents)
        .map_err(|e| RosterError::persistence(format!("{}: {}", path.display(), e)))?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(RosterError::persistence(format!(
            "{}: unsupported snapshot version {}",
            path.display(),
            snapshot.version
        )));
    }
    Ok(snapshot.records)
}
