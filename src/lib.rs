//! NBA League Sync CLI Library
//!
//! A Rust library for reconciling NBA league data from the balldontlie API
//! into a local SQLite store, with idempotent upsert semantics and a small
//! local notification feed.
//!
//! ## Features
//!
//! - **Full-table reconciliation**: Teams, players (with rolling per-game
//!   statistics), and games, synced in dependency order
//! - **Idempotent upserts**: Re-running a sync with unchanged upstream data
//!   produces no duplicate rows and no field drift
//! - **Pagination**: Page loops driven by the server-reported total-page count
//! - **Season windows**: Season resolution from the calendar with a one-shot
//!   fallback to the prior season when a window comes back empty
//! - **Local browsing**: List stored teams, players, and games from the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_sync::{bdl::BdlClient, storage::LeagueDatabase, sync::Synchronizer};
//!
//! # async fn example() -> nba_sync::Result<()> {
//! let client = BdlClient::new("my-api-key".to_string());
//! let db = LeagueDatabase::new()?;
//! let mut sync = Synchronizer::new(client, db);
//! let report = sync.run(None, 100, false).await?;
//! println!("{} teams, {} players, {} games",
//!     report.teams_synced, report.players_synced, report.games_synced);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your balldontlie API key to avoid passing it in every command:
//! ```bash
//! export BALLDONTLIE_API_KEY=your-key
//! ```

pub mod bdl;
pub mod cli;
pub mod commands;
pub mod error;
pub mod stats;
pub mod storage;
pub mod sync;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, Season, TeamId};
pub use error::{Result, SyncError};
pub use stats::StatLine;
pub use sync::SyncReport;

pub const API_KEY_ENV_VAR: &str = "BALLDONTLIE_API_KEY";
