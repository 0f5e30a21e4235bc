//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{Season, TeamId};

#[derive(Debug, Parser)]
#[clap(name = "nba-sync", about = "NBA league data synchronization CLI")]
pub struct NbaSync {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Synchronize teams, players, and games from the balldontlie API.
    ///
    /// Runs a full reconciliation in dependency order (teams, then players
    /// with their rolling statistics, then games) and records the outcome in
    /// the local notification feed.
    Sync {
        /// API key (or set `BALLDONTLIE_API_KEY` env var).
        #[clap(long, short)]
        api_key: Option<String>,

        /// Season starting year, e.g. 2024 for the 2024-2025 season
        /// (defaults to the season active today).
        #[clap(long, short)]
        season: Option<Season>,

        /// Rows per page for paginated endpoints (API ceiling is 100).
        #[clap(long, default_value_t = 100)]
        page_size: u32,

        /// Clear all synced data from the database before fetching.
        #[clap(long)]
        clear_db: bool,

        /// Show per-page progress information.
        #[clap(long)]
        verbose: bool,

        /// Output the final report as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// List stored teams.
    Teams {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List stored players with their rolling per-game statistics.
    Players {
        /// Restrict to one team's roster (external team ID).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List stored games, newest first.
    Games {
        /// Restrict to games a team took part in (external team ID).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the local notification feed.
    Notifications {
        /// Show unread notifications only.
        #[clap(long)]
        unread: bool,

        /// Mark the given notification as read instead of listing.
        #[clap(long)]
        mark_read: Option<i64>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
