//! Storage layer for the NBA League Sync CLI
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Upserts, reads, and the notification feed
//!
//! The [`LeagueStore`] trait is the repository interface the synchronizer
//! writes through; [`LeagueDatabase`] is its SQLite implementation.

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::LeagueDatabase;

use anyhow::Result;

/// Repository interface for the entities the synchronizer reconciles.
///
/// Each batch call commits as a single transaction: a fetched page is
/// persisted as one unit before the pagination cursor advances. Upserts are
/// keyed by external ID and return the count of newly inserted rows, so
/// re-running a sync with unchanged upstream data reports zero.
pub trait LeagueStore {
    fn upsert_teams(&mut self, teams: &[Team]) -> Result<usize>;
    fn upsert_players(&mut self, players: &[Player]) -> Result<usize>;
    fn upsert_games(&mut self, games: &[Game]) -> Result<usize>;
    fn upsert_performances(&mut self, performances: &[PlayerPerformance]) -> Result<usize>;
}
