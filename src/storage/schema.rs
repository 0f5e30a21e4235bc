//! Database schema and connection management

use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::PathBuf;

use crate::error::SyncError;

/// Database connection manager for league data
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the cache directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open a database at an explicit path (used by integration tests).
    pub fn open(path: &std::path::Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (used by tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| SyncError::Cache {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("nba-sync").join("league.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // External IDs from the upstream API serve as primary keys for
        // teams, players, and games. Foreign keys are declared but not
        // enforced; sync ordering (teams -> players -> games) satisfies
        // them in practice and absent references are stored as NULL.
        // The bundled SQLite enforces foreign keys by default, so turn
        // that off explicitly: a dangling reference after a partial sync
        // must not fail the upsert.
        self.conn.pragma_update(None, "foreign_keys", false)?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                city TEXT NOT NULL,
                conference TEXT,
                division TEXT,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                position TEXT,
                height TEXT,
                weight TEXT,
                team_id INTEGER REFERENCES teams(id),
                points_per_game REAL NOT NULL DEFAULT 0,
                assists_per_game REAL NOT NULL DEFAULT 0,
                rebounds_per_game REAL NOT NULL DEFAULT 0,
                minutes_per_game REAL NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                season INTEGER NOT NULL,
                period INTEGER,
                status TEXT,
                home_team_id INTEGER REFERENCES teams(id),
                home_team_score INTEGER NOT NULL DEFAULT 0,
                visitor_team_id INTEGER REFERENCES teams(id),
                visitor_team_score INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Composite key keeps performance upserts idempotent
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS performances (
                player_id INTEGER NOT NULL,
                game_id INTEGER NOT NULL,
                points REAL NOT NULL DEFAULT 0,
                assists REAL NOT NULL DEFAULT 0,
                rebounds REAL NOT NULL DEFAULT 0,
                minutes REAL NOT NULL DEFAULT 0,
                field_goals_made REAL NOT NULL DEFAULT 0,
                field_goals_attempted REAL NOT NULL DEFAULT 0,
                three_points_made REAL NOT NULL DEFAULT 0,
                three_points_attempted REAL NOT NULL DEFAULT 0,
                free_throws_made REAL NOT NULL DEFAULT 0,
                free_throws_attempted REAL NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, game_id),
                FOREIGN KEY (player_id) REFERENCES players(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS notifications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                message TEXT NOT NULL,
                kind TEXT NOT NULL DEFAULT 'info',
                is_read INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Create indexes for performance
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_season_date ON games(season, date)",
            [],
        )?;

        Ok(())
    }
}
