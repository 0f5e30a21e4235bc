//! Type-safe wrappers used throughout the CLI and library.

pub mod ids;
pub mod time;

pub use ids::{GameId, PlayerId, TeamId};
pub use time::Season;
