//! Integration tests for the balancing engine through the public API

use soccer_league::{
    fairness_report, league::fairness_score, league::seed_players, optimize_teams, Height,
    League, LeagueConfig, Player, RosterError, Team,
};

fn player(first: &str, last: &str, inches: u32, experienced: bool) -> Player {
    Player::new(first, last, Height::new(inches).unwrap(), experienced)
}

fn league_with_teams(names: &[&str]) -> League {
    let mut league = League::default();
    for name in names {
        league.create_team(name, "Coach").unwrap();
    }
    league
}

#[test]
fn test_fourth_team_rejected_for_seed_pool() {
    let mut league = league_with_teams(&["Dragons", "Sharks", "Tigers"]);

    let result = league.create_team("Wolves", "Coach");
    assert!(matches!(
        result,
        Err(RosterError::TeamCapacityExceeded { max_teams: 3 })
    ));
}

#[test]
fn test_ability_score_depends_only_on_height_and_experience() {
    let a = player("Joe", "Smith", 42, true);
    let b = player("Someone", "Else", 42, true);
    let c = player("Joe", "Smith", 42, false);

    assert_eq!(a.ability_score(), b.ability_score());
    assert_eq!(a.ability_score() - c.ability_score(), soccer_league::EXPERIENCE_BONUS);
}

#[test]
fn test_fairness_scenario_from_two_team_scores() {
    assert_eq!(fairness_score(48.0, 46.0, 20.0), 90);
}

#[test]
fn test_optimize_then_fairness_on_seed_league() {
    let mut league = league_with_teams(&["Dragons", "Sharks", "Tigers"]);
    optimize_teams(&mut league).unwrap();

    let sizes: Vec<usize> = league.teams().map(Team::len).collect();
    assert_eq!(sizes, vec![11, 11, 11]);
    assert!(league.pool().iter().all(Player::is_drafted));

    let report = fairness_report(&league);
    assert_eq!(report.fairness_score, Some(100));
}

#[test]
fn test_optimize_twice_gives_same_totals() {
    let mut league = league_with_teams(&["Dragons", "Sharks"]);
    optimize_teams(&mut league).unwrap();
    let first: Vec<f64> = league.teams().map(Team::total_ability_score).collect();

    optimize_teams(&mut league).unwrap();
    let second: Vec<f64> = league.teams().map(Team::total_ability_score).collect();

    assert_eq!(first, second);
}

#[test]
fn test_manual_draft_then_optimize_then_unassign() {
    let mut league = league_with_teams(&["Dragons", "Sharks"]);
    let joe = league.pool()[0].clone();
    league.assign_player("Sharks", &joe).unwrap();

    optimize_teams(&mut league).unwrap();
    let team = league.team_of(&joe).unwrap().name().to_string();

    league.unassign_player(&team, &joe).unwrap();
    assert!(!league.pool()[0].is_drafted());
    assert!(league.team_of(&joe).is_none());

    // once off a team, the player can leave the pool
    assert_eq!(league.remove_from_pool(&joe).unwrap(), None);
    assert_eq!(league.pool().len(), 32);
}

#[test]
fn test_waiting_list_fills_in_order() {
    let mut league = League::default();
    let a = player("Amy", "First", 40, false);
    let b = player("Ben", "Second", 41, true);
    league.enqueue_waiting(a.clone()).unwrap();
    league.enqueue_waiting(b.clone()).unwrap();

    let first_out = league.pool()[10].clone();
    let second_out = league.pool()[11].clone();
    assert_eq!(league.remove_from_pool(&first_out).unwrap(), Some(a.clone()));
    assert_eq!(league.remove_from_pool(&second_out).unwrap(), Some(b.clone()));

    assert_eq!(league.pool()[10], a);
    assert_eq!(league.pool()[11], b);
    assert_eq!(league.waiting_list().count(), 0);
}

#[test]
fn test_small_custom_league() {
    let pool: Vec<Player> = seed_players().into_iter().take(6).collect();
    let mut league = League::with_pool(LeagueConfig::new(3), pool);
    league.create_team("Ants", "Coach A").unwrap();
    league.create_team("Bears", "Coach B").unwrap();
    assert!(league.create_team("Cats", "Coach C").is_err());

    optimize_teams(&mut league).unwrap();

    let placed: usize = league.teams().map(Team::len).sum();
    assert_eq!(placed, 6);
    let totals: Vec<f64> = league.teams().map(Team::total_ability_score).collect();
    assert_eq!(totals, vec![269.0, 278.0]);

    // the balancer places everyone, even past the roster cap
    assert_eq!(league.team("Ants").unwrap().len(), 4);
    assert_eq!(league.team("Bears").unwrap().len(), 2);
}
