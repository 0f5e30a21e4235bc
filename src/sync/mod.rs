//! Full-table reconciliation of league data into the local store.
//!
//! The synchronizer drives the API client page by page, transforms each
//! page's records into local entity shapes, and upserts them by external ID,
//! in strict dependency order: teams first, then players (whose rows
//! reference teams), then games (which reference both teams). Pagination
//! advances off the server-reported total-page count alone.
//!
//! A transport failure on any page surfaces as an empty page with a
//! total-page count of 1, which ends that entity type's loop early: callers
//! observe a possibly-partial sync count, never an error. Pages already
//! committed stay committed.
//!
//! The store is shared mutable state and the pipeline takes `&mut self`, so
//! the borrow checker enforces at most one sync in flight per process; the
//! CLI runs one sync per invocation.

use serde::Serialize;

use crate::bdl::types::{ApiGame, ApiPlayer, ApiStatLine, ApiTeam};
use crate::bdl::SportsApi;
use crate::cli::types::{PlayerId, Season};
use crate::stats::{parse_minutes, StatLine};
use crate::storage::{Game, LeagueStore, Player, PlayerPerformance, Team};
use crate::Result;


/// Aggregate counts from one reconciliation run.
///
/// `teams_synced` is the number of team records processed; `players_synced`
/// and `games_synced` count newly inserted rows only.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SyncReport {
    pub teams_synced: usize,
    pub players_synced: usize,
    pub games_synced: usize,
}

/// Orchestrates reconciliation of the upstream API into a [`LeagueStore`].
pub struct Synchronizer<A, S> {
    api: A,
    store: S,
}

impl<A: SportsApi, S: LeagueStore> Synchronizer<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Give the store back, e.g. to record a notification after the run.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Run a full sync: teams, then players with their rolling statistics,
    /// then games for the given season (defaulting to the current one).
    pub async fn run(
        &mut self,
        season: Option<Season>,
        page_size: u32,
        verbose: bool,
    ) -> Result<SyncReport> {
        let season = season.unwrap_or_else(Season::current);

        let teams_synced = self.sync_teams(verbose).await?;
        let players_synced = self.sync_players(page_size, verbose).await?;
        let games_synced = self.sync_games(season, page_size, verbose).await?;

        Ok(SyncReport {
            teams_synced,
            players_synced,
            games_synced,
        })
    }

    /// Sync all teams (a single page in practice); returns the count synced.
    pub async fn sync_teams(&mut self, verbose: bool) -> Result<usize> {
        let records: Vec<Team> = self
            .api
            .list_teams()
            .await
            .into_iter()
            .map(team_from_api)
            .collect();

        let synced = records.len();
        let inserted = self.store.upsert_teams(&records)?;
        if verbose {
            println!("✓ {} teams synced ({} new)", synced, inserted);
        }
        Ok(synced)
    }

    /// Sync every page of players, deriving each player's rolling averages
    /// from their most recent stat line; returns the newly inserted count.
    pub async fn sync_players(&mut self, page_size: u32, verbose: bool) -> Result<usize> {
        let mut page = 1u32;
        let mut inserted = 0;

        loop {
            let result = self.api.list_players(page, page_size).await;
            let total_pages = result.total_pages;

            let mut players = Vec::with_capacity(result.records.len());
            let mut performances = Vec::new();
            for record in result.records {
                let lines = self.api.player_stats(record.id).await;
                // The last entry in the returned sequence is the most
                // recent game; no stat line at all means all zeros.
                let latest = lines.last();
                let averages = latest.map(stat_line_from_api).unwrap_or_default();
                if let Some(perf) = latest.and_then(|line| performance_from_api(record.id, line)) {
                    performances.push(perf);
                }
                players.push(player_from_api(record, averages));
            }

            inserted += self.store.upsert_players(&players)?;
            self.store.upsert_performances(&performances)?;

            if verbose {
                println!(
                    "✓ players page {}/{} ({} records)",
                    page,
                    total_pages,
                    players.len()
                );
            }

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        Ok(inserted)
    }

    /// Sync every page of the season's games; returns the newly inserted count.
    pub async fn sync_games(
        &mut self,
        season: Season,
        page_size: u32,
        verbose: bool,
    ) -> Result<usize> {
        let mut page = 1u32;
        let mut inserted = 0;

        loop {
            let result = self.api.list_games(season, page, page_size).await;
            let total_pages = result.total_pages;

            let games: Vec<Game> = result.records.into_iter().map(game_from_api).collect();
            inserted += self.store.upsert_games(&games)?;

            if verbose {
                println!(
                    "✓ games page {}/{} ({} records)",
                    page,
                    total_pages,
                    games.len()
                );
            }

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        Ok(inserted)
    }
}

fn team_from_api(api: ApiTeam) -> Team {
    Team {
        id: api.id,
        name: api.full_name,
        city: api.city,
        conference: api.conference,
        division: api.division,
    }
}

fn player_from_api(api: ApiPlayer, averages: StatLine) -> Player {
    Player {
        id: api.id,
        first_name: api.first_name,
        last_name: api.last_name,
        position: api.position,
        height: api.height,
        weight: api.weight,
        team_id: api.team.map(|team| team.id),
        averages,
    }
}

fn game_from_api(api: ApiGame) -> Game {
    Game {
        id: api.id,
        date: api.date,
        season: api.season,
        period: api.period,
        status: api.status,
        home_team_id: api.home_team.map(|team| team.id),
        home_team_score: api.home_team_score.unwrap_or(0),
        visitor_team_id: api.visitor_team.map(|team| team.id),
        visitor_team_score: api.visitor_team_score.unwrap_or(0),
    }
}

fn stat_line_from_api(line: &ApiStatLine) -> StatLine {
    StatLine {
        points: line.pts.unwrap_or(0.0),
        assists: line.ast.unwrap_or(0.0),
        rebounds: line.reb.unwrap_or(0.0),
        minutes: parse_minutes(line.min.as_deref()),
    }
}

/// A performance row needs a game to hang off; stat lines without a game
/// reference still feed the rolling averages but produce no row.
fn performance_from_api(player_id: PlayerId, line: &ApiStatLine) -> Option<PlayerPerformance> {
    let game = line.game.as_ref()?;
    Some(PlayerPerformance {
        player_id,
        game_id: game.id,
        line: stat_line_from_api(line),
        field_goals_made: line.fgm.unwrap_or(0.0),
        field_goals_attempted: line.fga.unwrap_or(0.0),
        three_points_made: line.fg3m.unwrap_or(0.0),
        three_points_attempted: line.fg3a.unwrap_or(0.0),
        free_throws_made: line.ftm.unwrap_or(0.0),
        free_throws_attempted: line.fta.unwrap_or(0.0),
    })
}
