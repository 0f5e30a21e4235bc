//! Per-game statistical line shared by players and performances.

use serde::{Deserialize, Serialize};

/// A per-game statistical line: the four rolling figures the rest of the
/// application displays and ranks by.
///
/// Entities hold or compute a `StatLine` rather than inheriting behavior;
/// a missing stat line is represented by [`StatLine::default`] (all zeros).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatLine {
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub minutes: f64,
}

impl StatLine {
    pub fn new(points: f64, assists: f64, rebounds: f64, minutes: f64) -> Self {
        Self {
            points,
            assists,
            rebounds,
            minutes,
        }
    }

    /// Weighted production per minute played. Minutes are floored at 1 so a
    /// zero-minute line never divides by zero.
    pub fn efficiency_rating(&self) -> f64 {
        (self.points + self.assists * 2.0 + self.rebounds * 1.5) / self.minutes.max(1.0)
    }
}

/// Parse a colon-delimited minutes clock string (e.g. `"32:15"`) down to its
/// whole-minutes component. Absent or unparseable input yields zero.
pub fn parse_minutes(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.split(':').next())
        .and_then(|m| m.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}
