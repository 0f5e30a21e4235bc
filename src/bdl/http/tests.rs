//! Unit tests for the balldontlie HTTP client.

use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use super::*;

fn test_client(server: &MockServer) -> BdlClient {
    BdlClient::with_base_url("test-key".to_string(), server.uri())
}

fn team_payload() -> serde_json::Value {
    json!({
        "data": [
            {"id": 1, "full_name": "Atlanta Hawks", "city": "Atlanta",
             "conference": "East", "division": "Southeast"},
            {"id": 2, "full_name": "Boston Celtics", "city": "Boston",
             "conference": "East", "division": "Atlantic"}
        ],
        "meta": {"total_pages": 1}
    })
}

#[tokio::test]
async fn test_list_teams_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(team_payload()))
        .mount(&server)
        .await;

    let teams = test_client(&server).list_teams().await;
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].full_name, "Atlanta Hawks");
    assert_eq!(teams[1].city, "Boston");
}

#[tokio::test]
async fn test_list_teams_server_error_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let teams = test_client(&server).list_teams().await;
    assert!(teams.is_empty());
}

#[tokio::test]
async fn test_list_players_reports_total_pages() {
    let server = MockServer::start().await;

    let payload = json!({
        "data": [{"id": 237, "first_name": "LeBron", "last_name": "James",
                  "position": "F", "team": {"id": 14}}],
        "meta": {"total_pages": 42}
    });

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let page = test_client(&server).list_players(3, 25).await;
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.total_pages, 42);
    assert_eq!(page.records[0].team.as_ref().unwrap().id.as_u64(), 14);
}

#[tokio::test]
async fn test_list_players_failure_terminates_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let page = test_client(&server).list_players(2, 100).await;
    assert!(page.records.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_list_players_clamps_page_size() {
    let server = MockServer::start().await;

    // The API imposes a 100-row ceiling; an oversized request must be clamped.
    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server).list_players(1, 500).await;
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn test_list_games_uses_season_window() {
    let server = MockServer::start().await;

    let payload = json!({
        "data": [{"id": 1, "date": "2024-11-15", "season": 2024,
                  "status": "Final", "home_team": {"id": 14},
                  "home_team_score": 110, "visitor_team": {"id": 2},
                  "visitor_team_score": 104}],
        "meta": {"total_pages": 5}
    });

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("start_date", "2024-10-01"))
        .and(query_param("end_date", "2025-06-30"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server).list_games(Season::new(2024), 1, 100).await;
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.total_pages, 5);
}

#[tokio::test]
async fn test_list_games_falls_back_to_prior_season_once() {
    let server = MockServer::start().await;

    // Current window is empty...
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("start_date", "2024-10-01"))
        .and(query_param("end_date", "2025-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    // ...so the prior season's window is tried exactly once.
    let prior = json!({
        "data": [{"id": 7, "date": "2024-03-01", "season": 2023, "status": "Final"}],
        "meta": {"total_pages": 1}
    });
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("start_date", "2023-10-01"))
        .and(query_param("end_date", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(prior))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server).list_games(Season::new(2024), 1, 100).await;
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].id.as_u64(), 7);
}

#[tokio::test]
async fn test_list_games_fallback_empty_gives_up() {
    let server = MockServer::start().await;

    // Both windows empty: one original request, one fallback, no more.
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&server)
        .await;

    let page = test_client(&server).list_games(Season::new(2024), 1, 100).await;
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn test_list_games_transport_failure_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let page = test_client(&server).list_games(Season::new(2024), 1, 100).await;
    assert!(page.records.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_player_stats_filter_param() {
    let server = MockServer::start().await;

    let payload = json!({
        "data": [
            {"min": "30:02", "pts": 18, "ast": 4, "reb": 6, "game": {"id": 100}},
            {"min": "32:15", "pts": 25, "ast": 7, "reb": 9, "game": {"id": 101}}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/stats"))
        .and(query_param("player_ids[]", "237"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let lines = test_client(&server).player_stats(PlayerId::new(237)).await;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].min.as_deref(), Some("32:15"));
}

#[tokio::test]
async fn test_player_stats_failure_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let lines = test_client(&server).player_stats(PlayerId::new(237)).await;
    assert!(lines.is_empty());
}

#[test]
fn test_bdl_base_url_constant() {
    assert_eq!(BDL_BASE_URL, "https://api.balldontlie.io/v1");
}
