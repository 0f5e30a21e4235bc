//! External ID types for balldontlie entities.
//!
//! The upstream API assigns stable numeric IDs to teams, players, and games;
//! we use them as local primary keys so that re-syncing is idempotent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a team's external ID.
///
/// # Examples
///
/// ```rust
/// use nba_sync::TeamId;
///
/// let team_id = TeamId::new(14);
/// assert_eq!(team_id.as_u64(), 14);
/// assert_eq!(team_id.to_string(), "14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = crate::SyncError;

    fn from_str(s: &str) -> crate::Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for a player's external ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = crate::SyncError;

    fn from_str(s: &str) -> crate::Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for a game's external ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = crate::SyncError;

    fn from_str(s: &str) -> crate::Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_roundtrip() {
        let id: TeamId = "14".parse().unwrap();
        assert_eq!(id, TeamId::new(14));
        assert_eq!(id.to_string(), "14");
    }

    #[test]
    fn test_player_id_parse_invalid() {
        assert!("not-a-number".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_game_id_as_u64() {
        assert_eq!(GameId::new(857623).as_u64(), 857623);
    }
}
