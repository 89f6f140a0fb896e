//! Team fairness report.

use super::roster::League;
use serde::Serialize;

/// Per-team line of the fairness report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamFairness {
    pub team: String,
    pub coach: String,
    pub average_height_inches: f64,
    pub experienced_players: usize,
    pub roster_size: usize,
    /// Share of the roster with previous experience, `0.0..=100.0`.
    pub experience_percent: f64,
    /// Average height plus experience percent.
    pub ability_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FairnessReport {
    /// Non-empty teams only, ordered by name.
    pub teams: Vec<TeamFairness>,
    pub high_discrepancy: f64,
    /// League fairness percentage; `None` when no team has players.
    pub fairness_score: Option<i64>,
}

/// `round((1 - (high - low) / high_discrepancy) * 100)`.
pub fn fairness_score(high_score: f64, low_score: f64, high_discrepancy: f64) -> i64 {
    ((1.0 - (high_score - low_score) / high_discrepancy) * 100.0).round() as i64
}

pub fn fairness_report(league: &League) -> FairnessReport {
    let teams: Vec<TeamFairness> = league
        .teams()
        .filter_map(|team| {
            let average_height_inches = team.average_height()?;
            let experience_percent = team.average_experience() * 100.0;
            Some(TeamFairness {
                team: team.name().to_string(),
                coach: team.coach().to_string(),
                average_height_inches,
                experienced_players: team.total_experience(),
                roster_size: team.len(),
                experience_percent,
                ability_score: average_height_inches + experience_percent,
            })
        })
        .collect();

    let high = teams.iter().map(|t| t.ability_score).reduce(f64::max);
    let low = teams.iter().map(|t| t.ability_score).reduce(f64::min);
    let fairness_score = high
        .zip(low)
        .map(|(high, low)| fairness_score(high, low, league.high_discrepancy()));

    FairnessReport {
        teams,
        high_discrepancy: league.high_discrepancy(),
        fairness_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fairness_score_formula() {
        assert_eq!(fairness_score(48.0, 46.0, 20.0), 90);
        assert_eq!(fairness_score(46.0, 46.0, 20.0), 100);
    }

    #[test]
    fn test_fairness_score_is_not_clamped() {
        assert_eq!(fairness_score(70.0, 40.0, 20.0), -50);
    }

    #[test]
    fn test_fairness_score_rounds_half_away_from_zero() {
        // (1 - 1/8) * 100 = 87.5
        assert_eq!(fairness_score(9.0, 8.0, 8.0), 88);
    }

    #[test]
    fn test_report_without_players() {
        let mut league = League::default();
        league.create_team("Sharks", "Coach S").unwrap();

        let report = fairness_report(&league);
        assert!(report.teams.is_empty());
        assert_eq!(report.fairness_score, None);
    }
}
