//! Command implementations for the soccer league CLI

pub mod common;
pub mod players;
pub mod reports;
pub mod teams;


use std::path::PathBuf;

use crate::{error::RosterError, storage::default_data_dir, Result, DATA_DIR_ENV_VAR};

pub use common::CommandContext;

/// Pick the data directory: explicit flag, then `SOCCER_LEAGUE_DATA_DIR`,
/// then the platform data directory.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    data_dir
        .or_else(|| {
            std::env::var_os(DATA_DIR_ENV_VAR)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .or_else(default_data_dir)
        .ok_or_else(|| {
            RosterError::persistence(format!(
                "could not determine a data directory; pass --data-dir or set {}",
                DATA_DIR_ENV_VAR
            ))
        })
}
