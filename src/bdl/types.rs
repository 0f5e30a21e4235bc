//! Payload types for the balldontlie API.

use crate::cli::types::{GameId, PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// One page of results together with the server-reported page count.
///
/// Pagination termination is driven entirely by `total_pages`; an empty page
/// with `total_pages == 1` is what callers get back on transport failure so
/// their loops exit instead of spinning.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// The page returned when a request fails: nothing to process, and a
    /// page count that terminates any pagination loop.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_pages: 1,
        }
    }
}

impl<T> From<Envelope<T>> for Page<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Self {
            records: envelope.data,
            total_pages: envelope.meta.total_pages,
        }
    }
}

/// Top-level response envelope: `{"data": [...], "meta": {...}}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    #[serde(rename = "total_pages", default = "default_total_pages")]
    pub total_pages: u32,
}

impl Default for Meta {
    fn default() -> Self {
        Self { total_pages: 1 }
    }
}

fn default_total_pages() -> u32 {
    1
}

/// A team as returned by `/teams`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTeam {
    pub id: TeamId,
    #[serde(rename = "full_name")]
    pub full_name: String,
    pub city: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
}

/// A player as returned by `/players`. The nested team reference is absent
/// for unassigned players.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiPlayer {
    pub id: PlayerId,
    #[serde(rename = "first_name")]
    pub first_name: String,
    #[serde(rename = "last_name")]
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub team: Option<ApiTeamRef>,
}

/// Minimal nested team reference carried by players, games, and stat lines.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTeamRef {
    pub id: TeamId,
}

/// A game as returned by `/games`. Either team reference may be absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiGame {
    pub id: GameId,
    pub date: String,
    pub season: i32,
    #[serde(default)]
    pub period: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub home_team: Option<ApiTeamRef>,
    #[serde(default)]
    pub home_team_score: Option<i64>,
    #[serde(default)]
    pub visitor_team: Option<ApiTeamRef>,
    #[serde(default)]
    pub visitor_team_score: Option<i64>,
}

/// Minimal nested game reference carried by stat lines.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiGameRef {
    pub id: GameId,
}

/// A per-game stat line as returned by `/stats`.
///
/// Minutes arrive as a colon-delimited clock string (`"32:15"`); counting
/// stats default to zero when the API omits them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiStatLine {
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub pts: Option<f64>,
    #[serde(default)]
    pub ast: Option<f64>,
    #[serde(default)]
    pub reb: Option<f64>,
    #[serde(default)]
    pub fgm: Option<f64>,
    #[serde(default)]
    pub fga: Option<f64>,
    #[serde(default)]
    pub fg3m: Option<f64>,
    #[serde(default)]
    pub fg3a: Option<f64>,
    #[serde(default)]
    pub ftm: Option<f64>,
    #[serde(default)]
    pub fta: Option<f64>,
    #[serde(default)]
    pub game: Option<ApiGameRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_meta() {
        let payload = json!({
            "data": [{"id": 1, "full_name": "Atlanta Hawks", "city": "Atlanta",
                      "conference": "East", "division": "Southeast"}],
            "meta": {"total_pages": 7}
        });
        let envelope: Envelope<ApiTeam> = serde_json::from_value(payload).unwrap();
        let page: Page<ApiTeam> = envelope.into();
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_pages, 7);
    }

    #[test]
    fn test_envelope_missing_meta_defaults_to_single_page() {
        let payload = json!({"data": []});
        let envelope: Envelope<ApiTeam> = serde_json::from_value(payload).unwrap();
        let page: Page<ApiTeam> = envelope.into();
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_player_without_team() {
        let payload = json!({
            "id": 237, "first_name": "LeBron", "last_name": "James",
            "position": "F", "height": "6-9", "weight": "250"
        });
        let player: ApiPlayer = serde_json::from_value(payload).unwrap();
        assert!(player.team.is_none());
        assert_eq!(player.height.as_deref(), Some("6-9"));
    }

    #[test]
    fn test_game_with_nested_teams() {
        let payload = json!({
            "id": 1038184, "date": "2024-11-15", "season": 2024,
            "period": 4, "status": "Final",
            "home_team": {"id": 14}, "home_team_score": 124,
            "visitor_team": {"id": 2}, "visitor_team_score": 118
        });
        let game: ApiGame = serde_json::from_value(payload).unwrap();
        assert_eq!(game.home_team.as_ref().unwrap().id, TeamId::new(14));
        assert_eq!(game.visitor_team_score, Some(118));
    }

    #[test]
    fn test_stat_line_sparse_fields() {
        let payload = json!({"pts": 31, "game": {"id": 1038184}});
        let line: ApiStatLine = serde_json::from_value(payload).unwrap();
        assert_eq!(line.pts, Some(31.0));
        assert!(line.min.is_none());
        assert!(line.ast.is_none());
        assert_eq!(line.game.unwrap().id, GameId::new(1038184));
    }
}
