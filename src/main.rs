//! Entry point: parse CLI and dispatch to command handlers.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use soccer_league::{
    cli::{Commands, PlayerCmd, ReportCmd, SoccerLeague, TeamCmd},
    commands::{players, reports, resolve_data_dir, teams, CommandContext},
    storage::SnapshotStore,
    LeagueConfig,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = SoccerLeague::parse();
    init_logging(app.opts.verbose);

    let data_dir = resolve_data_dir(app.opts.data_dir)?;
    let config = LeagueConfig::new(app.opts.max_players);
    let mut ctx = CommandContext::open(SnapshotStore::new(&data_dir), config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match app.command {
        Commands::Team { cmd } => match cmd {
            TeamCmd::Create { name, coach } => {
                teams::handle_create_team(&mut ctx, &name, &coach, &mut out)?
            }
            TeamCmd::List { json } => teams::handle_list_teams(&ctx, json, &mut out)?,
            TeamCmd::Roster { team, stats, json } => {
                teams::handle_roster(&ctx, &team, stats, json, &mut out)?
            }
            TeamCmd::Assign { team, player } => {
                teams::handle_assign(&mut ctx, &team, player, &mut out)?
            }
            TeamCmd::Unassign { team, player } => {
                teams::handle_unassign(&mut ctx, &team, player, &mut out)?
            }
        },

        Commands::Player { cmd } => match cmd {
            PlayerCmd::List { available, json } => {
                players::handle_list_players(&ctx, available, json, &mut out)?
            }
            PlayerCmd::Add {
                first_name,
                last_name,
                height,
                experienced,
            } => players::handle_add_waiting(
                &mut ctx,
                &first_name,
                &last_name,
                height,
                experienced,
                &mut out,
            )?,
            PlayerCmd::Remove { player } => {
                players::handle_remove_player(&mut ctx, player, &mut out)?
            }
            PlayerCmd::Waiting { json } => players::handle_waiting_list(&ctx, json, &mut out)?,
        },

        Commands::Optimize => teams::handle_optimize(&mut ctx, &mut out)?,

        Commands::Report { cmd } => match cmd {
            ReportCmd::Fairness { json } => reports::handle_fairness_report(&ctx, json, &mut out)?,
            ReportCmd::Heights { team, json } => {
                reports::handle_height_distribution(&ctx, &team, json, &mut out)?
            }
        },

        Commands::Reset => players::handle_reset(&mut ctx, &mut out)?,
    }
    out.flush()?;

    ctx.finish()
        .with_context(|| format!("Problem saving the league to {}", data_dir.display()))?;
    Ok(())
}
