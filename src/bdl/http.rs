//! HTTP plumbing for the balldontlie API.

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{ApiGame, ApiPlayer, ApiStatLine, ApiTeam, Envelope, Page};
use super::SportsApi;
use crate::cli::types::{PlayerId, Season};
use crate::Result;

#[cfg(test)]
mod tests;

/// Base path for the balldontlie v1 API.
pub const BDL_BASE_URL: &str = "https://api.balldontlie.io/v1";

/// API-imposed ceiling on `per_page`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// HTTP client for the balldontlie API.
///
/// Authentication is a bearer token in the `Authorization` header. The base
/// URL is configurable so tests can point the client at a mock server.
pub struct BdlClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BdlClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BDL_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Envelope<T>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let envelope = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Envelope<T>>()
            .await?;
        Ok(envelope)
    }

    async fn games_in_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        page: u32,
        per_page: u32,
    ) -> Result<Page<ApiGame>> {
        let params = [
            ("start_date", start.to_string()),
            ("end_date", end.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        let envelope: Envelope<ApiGame> = self.get_envelope("games", &params).await?;
        Ok(envelope.into())
    }
}

impl SportsApi for BdlClient {
    async fn list_teams(&self) -> Vec<ApiTeam> {
        match self.get_envelope::<ApiTeam>("teams", &[]).await {
            Ok(envelope) => envelope.data,
            Err(e) => {
                eprintln!("⚠ teams request failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn list_players(&self, page: u32, per_page: u32) -> Page<ApiPlayer> {
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        let params = [("page", page.to_string()), ("per_page", per_page.to_string())];
        match self.get_envelope::<ApiPlayer>("players", &params).await {
            Ok(envelope) => envelope.into(),
            Err(e) => {
                eprintln!("⚠ players request failed (page {}): {}", page, e);
                Page::empty()
            }
        }
    }

    async fn list_games(&self, season: Season, page: u32, per_page: u32) -> Page<ApiGame> {
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        let (start, end) = season.date_window();

        let first_try = match self.games_in_window(start, end, page, per_page).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("⚠ games request failed (page {}): {}", page, e);
                return Page::empty();
            }
        };
        if !first_try.records.is_empty() {
            return first_try;
        }

        // Shortly after rollover the new season's window has no games yet;
        // try the prior season's window exactly once and return whatever it
        // yields, including empty.
        let (prev_start, prev_end) = season.previous().date_window();
        eprintln!(
            "No games between {} and {}, retrying with the {} season",
            start,
            end,
            season.previous()
        );
        match self
            .games_in_window(prev_start, prev_end, page, per_page)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                eprintln!("⚠ games fallback request failed (page {}): {}", page, e);
                Page::empty()
            }
        }
    }

    async fn player_stats(&self, player_id: PlayerId) -> Vec<ApiStatLine> {
        let params = [("player_ids[]", player_id.to_string())];
        match self.get_envelope::<ApiStatLine>("stats", &params).await {
            Ok(envelope) => envelope.data,
            Err(e) => {
                eprintln!("⚠ stats request failed (player {}): {}", player_id, e);
                Vec::new()
            }
        }
    }
}
