//! League statistics reports.

use std::io::Write;

use super::common::{write_json, CommandContext};
use crate::{league::fairness_report, models::HeightBucket, Result};

/// Per-team height, experience and ability score, then the league
/// fairness percentage.
pub fn handle_fairness_report(
    ctx: &CommandContext,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let report = fairness_report(&ctx.league);
    if as_json {
        return write_json(out, &report);
    }

    let Some(score) = report.fairness_score else {
        writeln!(out, "No team has any players yet.")?;
        return Ok(());
    };
    writeln!(out, "Teams:")?;
    for line in &report.teams {
        writeln!(out, "{} (coached by {})", line.team, line.coach)?;
        writeln!(out, "        {:.0}\" average height", line.average_height_inches)?;
        writeln!(
            out,
            "        {:.0}% experience ({} out of {})",
            line.experience_percent, line.experienced_players, line.roster_size
        )?;
        writeln!(out, "        Ability score: {:.0}", line.ability_score)?;
    }
    writeln!(out)?;
    writeln!(out, "Total fairness score: {}%", score)?;
    Ok(())
}

/// Number of players at each height on one team.
pub fn handle_height_distribution(
    ctx: &CommandContext,
    team_name: &str,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let team = ctx.league.team(team_name)?;
    let buckets: Vec<HeightBucket> = team
        .height_distribution()
        .into_iter()
        .map(|(height_in_inches, players)| HeightBucket {
            height_in_inches,
            players,
        })
        .collect();
    if as_json {
        return write_json(out, &buckets);
    }

    if buckets.is_empty() {
        writeln!(out, "There are currently no players on the {}.", team)?;
        return Ok(());
    }
    writeln!(out, "Here is the height distribution for the {}:", team)?;
    for bucket in &buckets {
        let noun = if bucket.players == 1 { "player" } else { "players" };
        writeln!(
            out,
            "{} inches - {} {}",
            bucket.height_in_inches, bucket.players, noun
        )?;
    }
    Ok(())
}
