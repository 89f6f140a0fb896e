//! Youth Soccer League Roster Manager Library
//!
//! Organizers build teams from a shared player pool, keep a waiting list of
//! new sign-ups, and check how evenly talent is spread across the league.
//!
//! ## Features
//!
//! - **Roster Management**: Create teams and move players on and off them
//!   while league-wide limits (team count, roster size) are enforced
//! - **Waiting List**: New players queue up and fill pool spots in order
//! - **Team Balancing**: Greedy redistribution of every player by ability score
//! - **Fairness Report**: Per-team height and experience with a 0-100% league score
//! - **Snapshots**: Versioned JSON save files, replaced atomically
//!
//! ## Quick Start
//!
//! ```rust
//! use soccer_league::{fairness_report, optimize_teams, League};
//!
//! # fn example() -> soccer_league::Result<()> {
//! let mut league = League::default();
//! league.create_team("Sharks", "Coach Carter")?;
//! league.create_team("Tigers", "Coach Taylor")?;
//!
//! optimize_teams(&mut league)?;
//!
//! let report = fairness_report(&league);
//! println!("Fairness: {:?}%", report.fairness_score);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a data directory to avoid passing `--data-dir` every time:
//! ```bash
//! export SOCCER_LEAGUE_DATA_DIR=~/soccer-league
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod league;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Height, PlayerNumber};
pub use config::{LeagueConfig, DEFAULT_MAX_PLAYERS_PER_TEAM};
pub use error::{Result, RosterError};
pub use league::{
    fairness_report, optimize_teams, FairnessReport, League, Player, Team, EXPERIENCE_BONUS,
};

pub const DATA_DIR_ENV_VAR: &str = "SOCCER_LEAGUE_DATA_DIR";
