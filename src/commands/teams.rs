//! Team commands: creation, rosters, assignment and balancing.

use std::io::Write;

use super::common::{write_json, CommandContext};
use crate::{
    cli::types::PlayerNumber, league::optimize_teams, models::TeamView, Result,
};

pub fn handle_create_team(
    ctx: &mut CommandContext,
    name: &str,
    coach: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let team = ctx.league.create_team(name, coach)?;
    writeln!(
        out,
        "Team \"{}\" (coached by {}) created! You may now add new players.",
        team.name(),
        team.coach()
    )?;
    ctx.mark_changed();
    Ok(())
}

pub fn handle_list_teams(ctx: &CommandContext, as_json: bool, out: &mut dyn Write) -> Result<()> {
    let league = &ctx.league;
    if as_json {
        let teams: Vec<TeamView> = league.teams().map(TeamView::new).collect();
        return write_json(out, &teams);
    }

    if league.teams().next().is_none() {
        writeln!(
            out,
            "No teams are currently set up. The league has room for {}.",
            league.max_teams()
        )?;
        return Ok(());
    }
    writeln!(out, "Here are the current teams in the league:")?;
    for (i, team) in league.teams().enumerate() {
        writeln!(
            out,
            "{}. {} (coached by {}) - {} of {} players",
            i + 1,
            team,
            team.coach(),
            team.len(),
            league.config().max_players_per_team
        )?;
    }
    Ok(())
}

/// Print a team's roster; `stats` adds height and experience per player.
pub fn handle_roster(
    ctx: &CommandContext,
    team_name: &str,
    stats: bool,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let team = ctx.league.team(team_name)?;
    if as_json {
        return write_json(out, &TeamView::new(team));
    }

    if team.is_empty() {
        writeln!(out, "There are currently no players on the {}.", team)?;
        return Ok(());
    }
    writeln!(out, "Here are all the players currently on the {}:", team)?;
    for player in team.players() {
        if stats {
            writeln!(out, "{}", player.stats_line())?;
        } else {
            writeln!(out, "{}", player)?;
        }
    }
    Ok(())
}

pub fn handle_assign(
    ctx: &mut CommandContext,
    team_name: &str,
    number: PlayerNumber,
    out: &mut dyn Write,
) -> Result<()> {
    let player = ctx.player(number)?;
    ctx.league.assign_player(team_name, &player)?;
    writeln!(out, "{} added to {}!", player, team_name)?;
    ctx.mark_changed();
    Ok(())
}

pub fn handle_unassign(
    ctx: &mut CommandContext,
    team_name: &str,
    number: PlayerNumber,
    out: &mut dyn Write,
) -> Result<()> {
    let player = ctx.player(number)?;
    ctx.league.unassign_player(team_name, &player)?;
    writeln!(out, "{} removed from {}!", player, team_name)?;
    ctx.mark_changed();
    Ok(())
}

/// Rebuild every team with the greedy balancer.
pub fn handle_optimize(ctx: &mut CommandContext, out: &mut dyn Write) -> Result<()> {
    optimize_teams(&mut ctx.league)?;
    ctx.mark_changed();

    writeln!(out, "Teams optimized!")?;
    for team in ctx.league.teams() {
        writeln!(
            out,
            "{}: {} players, total ability score {:.0}",
            team,
            team.len(),
            team.total_ability_score()
        )?;
    }
    Ok(())
}
