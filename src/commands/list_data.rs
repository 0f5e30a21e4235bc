//! Read-only listing commands over the local store.

use crate::{cli::types::TeamId, storage::LeagueDatabase, Result};

/// List stored teams.
pub fn handle_teams(as_json: bool) -> Result<()> {
    let db = LeagueDatabase::new()?;
    let teams = db.get_teams()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    if teams.is_empty() {
        println!("No teams stored yet - run `nba-sync sync` first");
        return Ok(());
    }
    for team in &teams {
        println!(
            "{:>4}  {:<28} {:<12} {:<10} {}",
            team.id,
            team.name,
            team.city,
            team.conference.as_deref().unwrap_or("-"),
            team.division.as_deref().unwrap_or("-"),
        );
    }
    println!("\n{} teams", teams.len());
    Ok(())
}

/// List stored players with rolling averages and efficiency rating.
pub fn handle_players(team_id: Option<TeamId>, as_json: bool) -> Result<()> {
    let db = LeagueDatabase::new()?;
    let players = db.get_players(team_id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players stored for this selection");
        return Ok(());
    }
    for player in &players {
        let team = player
            .team_id
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>8}  {:<26} {:<3} team {:>4}  {:>5.1} pts {:>4.1} ast {:>4.1} reb {:>4.1} min  eff {:.2}",
            player.id,
            player.full_name(),
            player.position.as_deref().unwrap_or("-"),
            team,
            player.averages.points,
            player.averages.assists,
            player.averages.rebounds,
            player.averages.minutes,
            player.averages.efficiency_rating(),
        );
    }
    println!("\n{} players", players.len());
    Ok(())
}

/// List stored games, newest first.
pub fn handle_games(team_id: Option<TeamId>, as_json: bool) -> Result<()> {
    let db = LeagueDatabase::new()?;
    let games = db.get_games(team_id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&games)?);
        return Ok(());
    }

    if games.is_empty() {
        println!("No games stored for this selection");
        return Ok(());
    }
    for game in &games {
        let home = game
            .home_team_id
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        let visitor = game
            .visitor_team_id
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{:>9}  {}  season {}  {:>4} {:>3}-{:<3} {:<4}  [{}]",
            game.id,
            game.date,
            game.season,
            home,
            game.home_team_score,
            game.visitor_team_score,
            visitor,
            game.status.as_deref().unwrap_or("scheduled"),
        );
    }
    println!("\n{} games", games.len());
    Ok(())
}
