//! balldontlie API client.
//!
//! The client normalizes transport and decode failures into empty results:
//! callers drive pagination loops off the returned page counts and never see
//! an error. The [`SportsApi`] trait is the seam the synchronizer is generic
//! over, so tests can drive it with a scripted double instead of the network.

pub mod http;
pub mod types;

pub use http::{BdlClient, BDL_BASE_URL, MAX_PAGE_SIZE};
pub use types::{ApiGame, ApiPlayer, ApiStatLine, ApiTeam, Page};

use crate::cli::types::{PlayerId, Season};

/// Read-only view of the upstream sports-data API.
///
/// Every method is side-effect-free with respect to local state and
/// infallible from the caller's view; failures come back as empty results.
#[allow(async_fn_in_trait)]
pub trait SportsApi {
    /// Fetch all teams. Teams fit in a single page in practice.
    async fn list_teams(&self) -> Vec<ApiTeam>;

    /// Fetch one page of players. `page` starts at 1.
    async fn list_players(&self, page: u32, per_page: u32) -> Page<ApiPlayer>;

    /// Fetch one page of games within the season's date window, retrying the
    /// prior season's window once when the requested page comes back empty.
    async fn list_games(&self, season: Season, page: u32, per_page: u32) -> Page<ApiGame>;

    /// Fetch a player's stat lines. The last entry is the most recent game.
    async fn player_stats(&self, player_id: PlayerId) -> Vec<ApiStatLine>;
}
