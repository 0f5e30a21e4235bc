//! Command implementations for the NBA League Sync CLI

pub mod list_data;
pub mod notifications;
pub mod sync_data;

use crate::{Result, SyncError, API_KEY_ENV_VAR};

/// Resolve the API key from an explicit value or the environment.
pub fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    resolve_api_key_from(api_key, std::env::var(API_KEY_ENV_VAR).ok())
}

/// Resolution logic with the environment lookup injected: an explicit key
/// always wins over the environment.
fn resolve_api_key_from(api_key: Option<String>, env_value: Option<String>) -> Result<String> {
    api_key
        .or(env_value)
        .ok_or_else(|| SyncError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })
}

/// Tests that must mutate process environment variables take this lock so
/// they never race each other across test threads.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
