//! Integration tests for command handlers

use soccer_league::{
    commands::{players, reports, teams, CommandContext},
    storage::SnapshotStore,
    LeagueConfig, PlayerNumber, RosterError,
};
use tempfile::TempDir;

fn run<F>(store: &SnapshotStore, command: F) -> Result<String, RosterError>
where
    F: FnOnce(&mut CommandContext, &mut Vec<u8>) -> soccer_league::Result<()>,
{
    let mut ctx = CommandContext::open(store.clone(), LeagueConfig::default());
    let mut out = Vec::new();
    command(&mut ctx, &mut out)?;
    ctx.finish()?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_session_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp_dir.path());

    for name in ["Dragons", "Sharks", "Tigers"] {
        run(&store, |ctx, out| {
            teams::handle_create_team(ctx, name, "Coach", out)
        })
        .unwrap();
    }

    let err = run(&store, |ctx, out| {
        teams::handle_create_team(ctx, "Wolves", "Coach", out)
    })
    .unwrap_err();
    assert!(matches!(err, RosterError::TeamCapacityExceeded { max_teams: 3 }));

    run(&store, |ctx, out| teams::handle_optimize(ctx, out)).unwrap();

    let report = run(&store, |ctx, out| {
        reports::handle_fairness_report(ctx, false, out)
    })
    .unwrap();
    assert!(report.contains("Total fairness score: 100%"));

    let free = run(&store, |ctx, out| {
        players::handle_list_players(ctx, true, true, out)
    })
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&free).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[test]
fn test_drafted_player_cannot_be_removed_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp_dir.path());

    run(&store, |ctx, out| {
        teams::handle_create_team(ctx, "Sharks", "Coach", out)?;
        teams::handle_assign(ctx, "Sharks", PlayerNumber::new(3), out)
    })
    .unwrap();

    let err = run(&store, |ctx, out| {
        players::handle_remove_player(ctx, PlayerNumber::new(3), out)
    })
    .unwrap_err();
    assert!(matches!(err, RosterError::PlayerIsDrafted { .. }));

    let roster = run(&store, |ctx, out| {
        teams::handle_unassign(ctx, "Sharks", PlayerNumber::new(3), out)?;
        players::handle_remove_player(ctx, PlayerNumber::new(3), out)
    })
    .unwrap();
    assert!(roster.contains("Bill Bon removed from Sharks!"));
    assert!(roster.contains("Bill Bon removed from player list."));

    let listing = run(&store, |ctx, out| {
        players::handle_list_players(ctx, false, false, out)
    })
    .unwrap();
    assert!(!listing.contains("Bill Bon"));
    assert!(listing.contains("32. Ryan Creedson"));
}
