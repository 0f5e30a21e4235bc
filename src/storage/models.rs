//! Data models for the storage layer

use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::stats::StatLine;
use serde::{Deserialize, Serialize};

/// A team, keyed by its external ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub city: String,
    pub conference: Option<String>,
    pub division: Option<String>,
}

/// A player, keyed by its external ID. `team_id` is null when the upstream
/// record carries no team reference; `averages` holds the rolling per-game
/// figures derived from the most recent available stat line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub team_id: Option<TeamId>,
    #[serde(flatten)]
    pub averages: StatLine,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A game, keyed by its external ID. Either team reference may be null when
/// the upstream record omits the nested team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub date: String,
    pub season: i32,
    pub period: Option<i64>,
    pub status: Option<String>,
    pub home_team_id: Option<TeamId>,
    pub home_team_score: i64,
    pub visitor_team_id: Option<TeamId>,
    pub visitor_team_score: i64,
}

/// A per-game statistical line linked to a player and a game. Keyed by
/// (player, game) so re-syncing never duplicates a performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub player_id: PlayerId,
    pub game_id: GameId,
    #[serde(flatten)]
    pub line: StatLine,
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    pub three_points_made: f64,
    pub three_points_attempted: f64,
    pub free_throws_made: f64,
    pub free_throws_attempted: f64,
}

/// An entry in the local notification feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: u64,
}
