//! Upserts, reads, and the notification feed

use super::{models::*, schema::LeagueDatabase, LeagueStore};
use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::stats::StatLine;
use anyhow::Result;
use rusqlite::{params, Row, Transaction};
use std::time::{SystemTime, UNIX_EPOCH};

fn unix_now() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

/// Insert-or-update a single team. Returns true when the row was newly
/// inserted; an existing row has its mutable fields overwritten in place and
/// keeps its id and created_at.
fn upsert_team_tx(tx: &Transaction, team: &Team, now: u64) -> rusqlite::Result<bool> {
    let inserted = tx.execute(
        "INSERT OR IGNORE INTO teams (id, name, city, conference, division, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
        params![
            team.id.as_u64(),
            team.name,
            team.city,
            team.conference,
            team.division,
            now
        ],
    )? > 0;

    if !inserted {
        tx.execute(
            "UPDATE teams SET name = ?, city = ?, conference = ?, division = ? WHERE id = ?",
            params![
                team.name,
                team.city,
                team.conference,
                team.division,
                team.id.as_u64()
            ],
        )?;
    }
    Ok(inserted)
}

fn upsert_player_tx(tx: &Transaction, player: &Player, now: u64) -> rusqlite::Result<bool> {
    let inserted = tx.execute(
        "INSERT OR IGNORE INTO players
         (id, first_name, last_name, position, height, weight, team_id,
          points_per_game, assists_per_game, rebounds_per_game, minutes_per_game, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            player.id.as_u64(),
            player.first_name,
            player.last_name,
            player.position,
            player.height,
            player.weight,
            player.team_id.map(|t| t.as_u64()),
            player.averages.points,
            player.averages.assists,
            player.averages.rebounds,
            player.averages.minutes,
            now
        ],
    )? > 0;

    if !inserted {
        tx.execute(
            "UPDATE players SET first_name = ?, last_name = ?, position = ?, height = ?,
                    weight = ?, team_id = ?, points_per_game = ?, assists_per_game = ?,
                    rebounds_per_game = ?, minutes_per_game = ?
             WHERE id = ?",
            params![
                player.first_name,
                player.last_name,
                player.position,
                player.height,
                player.weight,
                player.team_id.map(|t| t.as_u64()),
                player.averages.points,
                player.averages.assists,
                player.averages.rebounds,
                player.averages.minutes,
                player.id.as_u64()
            ],
        )?;
    }
    Ok(inserted)
}

fn upsert_game_tx(tx: &Transaction, game: &Game, now: u64) -> rusqlite::Result<bool> {
    let inserted = tx.execute(
        "INSERT OR IGNORE INTO games
         (id, date, season, period, status, home_team_id, home_team_score,
          visitor_team_id, visitor_team_score, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            game.id.as_u64(),
            game.date,
            game.season,
            game.period,
            game.status,
            game.home_team_id.map(|t| t.as_u64()),
            game.home_team_score,
            game.visitor_team_id.map(|t| t.as_u64()),
            game.visitor_team_score,
            now
        ],
    )? > 0;

    if !inserted {
        tx.execute(
            "UPDATE games SET date = ?, season = ?, period = ?, status = ?,
                    home_team_id = ?, home_team_score = ?,
                    visitor_team_id = ?, visitor_team_score = ?
             WHERE id = ?",
            params![
                game.date,
                game.season,
                game.period,
                game.status,
                game.home_team_id.map(|t| t.as_u64()),
                game.home_team_score,
                game.visitor_team_id.map(|t| t.as_u64()),
                game.visitor_team_score,
                game.id.as_u64()
            ],
        )?;
    }
    Ok(inserted)
}

fn upsert_performance_tx(
    tx: &Transaction,
    perf: &PlayerPerformance,
    now: u64,
) -> rusqlite::Result<bool> {
    let inserted = tx.execute(
        "INSERT OR IGNORE INTO performances
         (player_id, game_id, points, assists, rebounds, minutes,
          field_goals_made, field_goals_attempted, three_points_made,
          three_points_attempted, free_throws_made, free_throws_attempted, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            perf.player_id.as_u64(),
            perf.game_id.as_u64(),
            perf.line.points,
            perf.line.assists,
            perf.line.rebounds,
            perf.line.minutes,
            perf.field_goals_made,
            perf.field_goals_attempted,
            perf.three_points_made,
            perf.three_points_attempted,
            perf.free_throws_made,
            perf.free_throws_attempted,
            now
        ],
    )? > 0;

    if !inserted {
        tx.execute(
            "UPDATE performances SET points = ?, assists = ?, rebounds = ?, minutes = ?,
                    field_goals_made = ?, field_goals_attempted = ?,
                    three_points_made = ?, three_points_attempted = ?,
                    free_throws_made = ?, free_throws_attempted = ?
             WHERE player_id = ? AND game_id = ?",
            params![
                perf.line.points,
                perf.line.assists,
                perf.line.rebounds,
                perf.line.minutes,
                perf.field_goals_made,
                perf.field_goals_attempted,
                perf.three_points_made,
                perf.three_points_attempted,
                perf.free_throws_made,
                perf.free_throws_attempted,
                perf.player_id.as_u64(),
                perf.game_id.as_u64()
            ],
        )?;
    }
    Ok(inserted)
}

impl LeagueStore for LeagueDatabase {
    /// Upsert a page of teams as one transaction; returns newly inserted count.
    fn upsert_teams(&mut self, teams: &[Team]) -> Result<usize> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        for team in teams {
            if upsert_team_tx(&tx, team, now)? {
                inserted += 1;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn upsert_players(&mut self, players: &[Player]) -> Result<usize> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        for player in players {
            if upsert_player_tx(&tx, player, now)? {
                inserted += 1;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn upsert_games(&mut self, games: &[Game]) -> Result<usize> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        for game in games {
            if upsert_game_tx(&tx, game, now)? {
                inserted += 1;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn upsert_performances(&mut self, performances: &[PlayerPerformance]) -> Result<usize> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        for perf in performances {
            if upsert_performance_tx(&tx, perf, now)? {
                inserted += 1;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }
}

impl LeagueDatabase {
    /// Get all teams, alphabetical by name
    pub fn get_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, city, conference, division FROM teams ORDER BY name")?;

        let rows = stmt.query_map([], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Get players, optionally restricted to one team, alphabetical by last name
    pub fn get_players(&self, team_id: Option<TeamId>) -> Result<Vec<Player>> {
        let base = "SELECT id, first_name, last_name, position, height, weight, team_id,
                           points_per_game, assists_per_game, rebounds_per_game, minutes_per_game
                    FROM players";

        let mut players = Vec::new();
        if let Some(team) = team_id {
            let mut stmt = self
                .conn
                .prepare(&format!("{base} WHERE team_id = ? ORDER BY last_name, first_name"))?;
            let rows = stmt.query_map(params![team.as_u64()], row_to_player)?;
            for row in rows {
                players.push(row?);
            }
        } else {
            let mut stmt = self
                .conn
                .prepare(&format!("{base} ORDER BY last_name, first_name"))?;
            let rows = stmt.query_map([], row_to_player)?;
            for row in rows {
                players.push(row?);
            }
        }
        Ok(players)
    }

    /// Get games, newest first, optionally restricted to games a team took part in
    pub fn get_games(&self, team_id: Option<TeamId>) -> Result<Vec<Game>> {
        let base = "SELECT id, date, season, period, status, home_team_id, home_team_score,
                           visitor_team_id, visitor_team_score
                    FROM games";

        let mut games = Vec::new();
        if let Some(team) = team_id {
            let mut stmt = self.conn.prepare(&format!(
                "{base} WHERE home_team_id = ?1 OR visitor_team_id = ?1 ORDER BY date DESC"
            ))?;
            let rows = stmt.query_map(params![team.as_u64()], row_to_game)?;
            for row in rows {
                games.push(row?);
            }
        } else {
            let mut stmt = self.conn.prepare(&format!("{base} ORDER BY date DESC"))?;
            let rows = stmt.query_map([], row_to_game)?;
            for row in rows {
                games.push(row?);
            }
        }
        Ok(games)
    }

    /// Get a player's stored performances, most recent game first
    pub fn get_performances(&self, player_id: PlayerId) -> Result<Vec<PlayerPerformance>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, game_id, points, assists, rebounds, minutes,
                    field_goals_made, field_goals_attempted, three_points_made,
                    three_points_attempted, free_throws_made, free_throws_attempted
             FROM performances
             WHERE player_id = ?
             ORDER BY game_id DESC",
        )?;

        let rows = stmt.query_map(params![player_id.as_u64()], row_to_performance)?;

        let mut performances = Vec::new();
        for row in rows {
            performances.push(row?);
        }
        Ok(performances)
    }

    /// Row counts for the three synced tables: (teams, players, games)
    pub fn entity_counts(&self) -> Result<(u64, u64, u64)> {
        let count = |table: &str| -> rusqlite::Result<u64> {
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
        };
        Ok((count("teams")?, count("players")?, count("games")?))
    }

    /// Append an entry to the notification feed
    pub fn create_notification(&mut self, title: &str, message: &str, kind: &str) -> Result<Notification> {
        let now = unix_now()?;
        self.conn.execute(
            "INSERT INTO notifications (title, message, kind, is_read, created_at)
             VALUES (?, ?, ?, 0, ?)",
            params![title, message, kind, now],
        )?;
        Ok(Notification {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            message: message.to_string(),
            kind: kind.to_string(),
            is_read: false,
            created_at: now,
        })
    }

    /// List notifications, newest first
    pub fn notifications(&self, unread_only: bool) -> Result<Vec<Notification>> {
        let base = "SELECT id, title, message, kind, is_read, created_at FROM notifications";
        let query = if unread_only {
            format!("{base} WHERE is_read = 0 ORDER BY created_at DESC, id DESC")
        } else {
            format!("{base} ORDER BY created_at DESC, id DESC")
        };

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([], row_to_notification)?;

        let mut notifications = Vec::new();
        for row in rows {
            notifications.push(row?);
        }
        Ok(notifications)
    }

    /// Mark a notification as read; returns false when no such id exists
    pub fn mark_notification_read(&mut self, id: i64) -> Result<bool> {
        let updated = self
            .conn
            .execute("UPDATE notifications SET is_read = 1 WHERE id = ?", params![id])?;
        Ok(updated > 0)
    }

    /// Clear all synced data (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        // Children first
        self.conn.execute("DELETE FROM performances", [])?;
        self.conn.execute("DELETE FROM games", [])?;
        self.conn.execute("DELETE FROM players", [])?;
        self.conn.execute("DELETE FROM teams", [])?;
        Ok(())
    }
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: TeamId::new(row.get(0)?),
        name: row.get(1)?,
        city: row.get(2)?,
        conference: row.get(3)?,
        division: row.get(4)?,
    })
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        position: row.get(3)?,
        height: row.get(4)?,
        weight: row.get(5)?,
        team_id: row.get::<_, Option<u64>>(6)?.map(TeamId::new),
        averages: StatLine {
            points: row.get(7)?,
            assists: row.get(8)?,
            rebounds: row.get(9)?,
            minutes: row.get(10)?,
        },
    })
}

fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    Ok(Game {
        id: GameId::new(row.get(0)?),
        date: row.get(1)?,
        season: row.get(2)?,
        period: row.get(3)?,
        status: row.get(4)?,
        home_team_id: row.get::<_, Option<u64>>(5)?.map(TeamId::new),
        home_team_score: row.get(6)?,
        visitor_team_id: row.get::<_, Option<u64>>(7)?.map(TeamId::new),
        visitor_team_score: row.get(8)?,
    })
}

fn row_to_performance(row: &Row) -> rusqlite::Result<PlayerPerformance> {
    Ok(PlayerPerformance {
        player_id: PlayerId::new(row.get(0)?),
        game_id: GameId::new(row.get(1)?),
        line: StatLine {
            points: row.get(2)?,
            assists: row.get(3)?,
            rebounds: row.get(4)?,
            minutes: row.get(5)?,
        },
        field_goals_made: row.get(6)?,
        field_goals_attempted: row.get(7)?,
        three_points_made: row.get(8)?,
        three_points_attempted: row.get(9)?,
        free_throws_made: row.get(10)?,
        free_throws_attempted: row.get(11)?,
    })
}

fn row_to_notification(row: &Row) -> rusqlite::Result<Notification> {
    Ok(Notification {
        id: row.get(0)?,
        title: row.get(1)?,
        message: row.get(2)?,
        kind: row.get(3)?,
        is_read: row.get::<_, i64>(4)? != 0,
        created_at: row.get(5)?,
    })
}
