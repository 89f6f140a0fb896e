//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{Height, PlayerNumber};

use crate::config::DEFAULT_MAX_PLAYERS_PER_TEAM;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Directory holding the saved league (or set `SOCCER_LEAGUE_DATA_DIR`).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Maximum number of players on one team.
    #[clap(long, global = true, default_value_t = DEFAULT_MAX_PLAYERS_PER_TEAM)]
    pub max_players: usize,

    /// Log debug details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Create a new team
    Create {
        /// Team name (must be unique).
        name: String,

        /// Coach of the new team.
        #[clap(long, short)]
        coach: String,
    },

    /// List the teams in the league
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a team's roster
    Roster {
        team: String,

        /// Include height and experience for each player.
        #[clap(long)]
        stats: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Add a player (by `player list` number) to a team
    Assign { team: String, player: PlayerNumber },

    /// Take a player (by `player list` number) off a team
    Unassign { team: String, player: PlayerNumber },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// List the player pool with pick-by-number positions
    List {
        /// Only show players not yet on a team.
        #[clap(long)]
        available: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Add a new player to the end of the waiting list
    Add {
        first_name: String,
        last_name: String,

        /// Height in inches.
        #[clap(long)]
        height: Height,

        /// The player has played before.
        #[clap(long)]
        experienced: bool,
    },

    /// Remove a player from the pool; the next waiting player takes the spot
    Remove { player: PlayerNumber },

    /// Show the waiting list, next in line first
    Waiting {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReportCmd {
    /// Per-team height, experience and ability score plus the league fairness score
    Fairness {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Number of players at each height on a team
    Heights {
        team: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "soccer-league", about = "Youth soccer league roster manager")]
pub struct SoccerLeague {
    #[clap(flatten)]
    pub opts: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create teams, view rosters and move players on and off teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage the player pool and waiting list
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Redistribute every pool player across the existing teams to even out ability
    Optimize,

    /// League statistics
    Report {
        #[clap(subcommand)]
        cmd: ReportCmd,
    },

    /// Restore the default player pool and delete all teams and the waiting list
    Reset,
}
