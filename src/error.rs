//! Error types for the NBA League Sync CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Failed to parse numeric id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Season year out of range: {year}")]
    InvalidSeason { year: i32 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Notification not found: {id}")]
    NotificationNotFound { id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_display() {
        let err = SyncError::MissingApiKey {
            env_var: "BALLDONTLIE_API_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API key not provided and BALLDONTLIE_API_KEY environment variable not set"
        );
    }

    #[test]
    fn test_invalid_id_from_parse_error() {
        let parse_err = "abc".parse::<u64>().unwrap_err();
        let err: SyncError = parse_err.into();
        assert!(err.to_string().starts_with("Failed to parse numeric id"));
    }

    #[test]
    fn test_notification_not_found_display() {
        let err = SyncError::NotificationNotFound { id: 42 };
        assert_eq!(err.to_string(), "Notification not found: 42");
    }

    #[test]
    fn test_storage_from_anyhow() {
        let err: SyncError = anyhow::anyhow!("table missing").into();
        assert_eq!(err.to_string(), "table missing");
    }
}
