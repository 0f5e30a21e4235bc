//! Integration tests for on-disk persistence.

use nba_sync::stats::StatLine;
use nba_sync::storage::{Game, LeagueDatabase, LeagueStore, Player, Team};
use nba_sync::{GameId, PlayerId, TeamId};
use tempfile::TempDir;

fn sample_team(city: &str) -> Team {
    Team {
        id: TeamId::new(1),
        name: "Atlanta Hawks".to_string(),
        city: city.to_string(),
        conference: Some("East".to_string()),
        division: Some("Southeast".to_string()),
    }
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("league.db");

    {
        let mut db = LeagueDatabase::open(&path).unwrap();
        db.upsert_teams(&[sample_team("Atlanta")]).unwrap();
        db.upsert_players(&[Player {
            id: PlayerId::new(237),
            first_name: "Trae".to_string(),
            last_name: "Young".to_string(),
            position: Some("G".to_string()),
            height: Some("6-1".to_string()),
            weight: Some("164".to_string()),
            team_id: Some(TeamId::new(1)),
            averages: StatLine::new(25.0, 10.0, 3.0, 34.0),
        }])
        .unwrap();
    }

    let db = LeagueDatabase::open(&path).unwrap();
    let (teams, players, games) = db.entity_counts().unwrap();
    assert_eq!((teams, players, games), (1, 1, 0));

    let players = db.get_players(Some(TeamId::new(1))).unwrap();
    assert_eq!(players[0].full_name(), "Trae Young");
    assert_eq!(players[0].averages.points, 25.0);
}

#[test]
fn test_reopen_schema_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("league.db");

    // Opening twice runs CREATE TABLE IF NOT EXISTS twice; second open must
    // not disturb existing rows.
    {
        let mut db = LeagueDatabase::open(&path).unwrap();
        db.upsert_teams(&[sample_team("Atlanta")]).unwrap();
    }
    {
        let _db = LeagueDatabase::open(&path).unwrap();
    }

    let mut db = LeagueDatabase::open(&path).unwrap();
    // Re-syncing the same team with a changed city updates in place
    let inserted = db.upsert_teams(&[sample_team("Savannah")]).unwrap();
    assert_eq!(inserted, 0);

    let teams = db.get_teams().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].city, "Savannah");
}

#[test]
fn test_games_persist_with_null_references() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("league.db");

    let mut db = LeagueDatabase::open(&path).unwrap();
    db.upsert_games(&[Game {
        id: GameId::new(857623),
        date: "2024-11-15".to_string(),
        season: 2024,
        period: Some(4),
        status: Some("Final".to_string()),
        home_team_id: None,
        home_team_score: 0,
        visitor_team_id: Some(TeamId::new(2)),
        visitor_team_score: 0,
    }])
    .unwrap();

    let games = db.get_games(None).unwrap();
    assert_eq!(games.len(), 1);
    assert!(games[0].home_team_id.is_none());
    assert_eq!(games[0].visitor_team_id, Some(TeamId::new(2)));
}

#[test]
fn test_notification_feed_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("league.db");

    let id = {
        let mut db = LeagueDatabase::open(&path).unwrap();
        db.create_notification("Synchronization complete", "30 teams", "info")
            .unwrap()
            .id
    };

    let mut db = LeagueDatabase::open(&path).unwrap();
    assert_eq!(db.notifications(true).unwrap().len(), 1);
    assert!(db.mark_notification_read(id).unwrap());
    assert!(db.notifications(true).unwrap().is_empty());
}
