//! Season identification.
//!
//! The NBA season spans two calendar years and is identified by its starting
//! year: the 2024-2025 season is "2024".

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a season's starting year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub i32);

/// First season of league play.
const MIN_SEASON_YEAR: i32 = 1946;
/// Upper bound keeping every season's date window representable.
const MAX_SEASON_YEAR: i32 = 9999;

impl Season {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// The season active on the given date: October through December belong
    /// to the season starting that year, January through September to the
    /// season that started the year before.
    pub fn for_date(date: NaiveDate) -> Self {
        if date.month() >= 10 {
            Self(date.year())
        } else {
            Self(date.year() - 1)
        }
    }

    /// The season active today.
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// The season before this one.
    pub fn previous(&self) -> Self {
        Self(self.0 - 1)
    }

    /// The date window games of this season fall into: October 1st of the
    /// starting year through June 30th of the following year.
    pub fn date_window(&self) -> (NaiveDate, NaiveDate) {
        let start = NaiveDate::from_ymd_opt(self.0, 10, 1).expect("valid season start date");
        let end = NaiveDate::from_ymd_opt(self.0 + 1, 6, 30).expect("valid season end date");
        (start, end)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = crate::SyncError;

    fn from_str(s: &str) -> crate::Result<Self> {
        let year: i32 = s.parse()?;
        if !(MIN_SEASON_YEAR..=MAX_SEASON_YEAR).contains(&year) {
            return Err(crate::SyncError::InvalidSeason { year });
        }
        Ok(Self(year))
    }
}
