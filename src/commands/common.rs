//! Common utilities and helper functions shared across commands.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::{
    cli::types::PlayerNumber,
    config::LeagueConfig,
    league::{League, Player},
    storage::SnapshotStore,
    Result,
};

/// Context containing the resources every command needs
pub struct CommandContext {
    pub store: SnapshotStore,
    pub league: League,
    changed: bool,
}

impl CommandContext {
    /// Load the saved league, or start from the default one.
    pub fn open(store: SnapshotStore, config: LeagueConfig) -> Self {
        let league = store.load_or_default(config);
        Self::with_league(store, league)
    }

    pub fn with_league(store: SnapshotStore, league: League) -> Self {
        Self {
            store,
            league,
            changed: false,
        }
    }

    /// Note that the league was modified and must be saved.
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Save the league if any command changed it.
    pub fn finish(self) -> Result<()> {
        if self.changed {
            self.store.save(&self.league)?;
        } else {
            debug!("league unchanged, nothing to save");
        }
        Ok(())
    }

    /// Clone of the pool player with the given list number.
    pub fn player(&self, number: PlayerNumber) -> Result<Player> {
        self.league.player_at(number).cloned()
    }
}

/// Write a value as pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
