//! Player pool and waiting-list commands.

use std::io::Write;

use super::common::{write_json, CommandContext};
use crate::{
    cli::types::{Height, PlayerNumber},
    league::Player,
    models::PlayerView,
    Result,
};

/// List the pool by number; `available_only` hides players already on a team.
pub fn handle_list_players(
    ctx: &CommandContext,
    available_only: bool,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if as_json {
        let players: Vec<PlayerView> = PlayerView::pool(&ctx.league)
            .into_iter()
            .filter(|view| !available_only || !view.drafted)
            .collect();
        return write_json(out, &players);
    }

    if available_only {
        writeln!(out, "Here is a list of the current free agents:")?;
        writeln!(out, "(Players already on a team will not be shown)")?;
    } else {
        writeln!(out, "Here is a list of the current players:")?;
    }
    for (i, player) in ctx.league.pool().iter().enumerate() {
        if available_only && player.is_drafted() {
            continue;
        }
        match ctx.league.team_of(player) {
            Some(team) => writeln!(out, "{}. {} [{}]", i + 1, player.stats_line(), team)?,
            None => writeln!(out, "{}. {}", i + 1, player.stats_line())?,
        }
    }
    Ok(())
}

pub fn handle_add_waiting(
    ctx: &mut CommandContext,
    first_name: &str,
    last_name: &str,
    height: Height,
    experienced: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let player = Player::new(first_name, last_name, height, experienced);
    let line = player.stats_line();
    ctx.league.enqueue_waiting(player)?;
    writeln!(out, "New player: {} added to the waiting list!", line)?;
    ctx.mark_changed();
    Ok(())
}

/// Remove a pool player; the next waiting player takes their number.
pub fn handle_remove_player(
    ctx: &mut CommandContext,
    number: PlayerNumber,
    out: &mut dyn Write,
) -> Result<()> {
    let player = ctx.player(number)?;
    match ctx.league.remove_from_pool(&player)? {
        Some(replacement) => writeln!(
            out,
            "{} removed from player list and replaced with {}!",
            player, replacement
        )?,
        None => writeln!(
            out,
            "{} removed from player list. The waiting list is empty, so nobody replaces them.",
            player
        )?,
    }
    ctx.mark_changed();
    Ok(())
}

pub fn handle_waiting_list(
    ctx: &CommandContext,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let waiting: Vec<PlayerView> = ctx
        .league
        .waiting_list()
        .enumerate()
        .map(|(i, p)| PlayerView::new(i + 1, p, None))
        .collect();
    if as_json {
        return write_json(out, &waiting);
    }

    if waiting.is_empty() {
        writeln!(out, "Nobody is on the waiting list.")?;
        return Ok(());
    }
    writeln!(out, "Waiting list (next in line first):")?;
    for (i, player) in ctx.league.waiting_list().enumerate() {
        writeln!(out, "{}. {}", i + 1, player.stats_line())?;
    }
    Ok(())
}

/// Back to the default pool with no teams and nobody waiting.
pub fn handle_reset(ctx: &mut CommandContext, out: &mut dyn Write) -> Result<()> {
    ctx.league.reset();
    ctx.mark_changed();
    writeln!(
        out,
        "League reset: {} players, room for {} teams.",
        ctx.league.pool().len(),
        ctx.league.max_teams()
    )?;
    Ok(())
}
