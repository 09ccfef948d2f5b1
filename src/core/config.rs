use std::env;
use std::time::Duration;

const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
const DEFAULT_SERVER_CATEGORY: &str = "Server";
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 5 * 60;

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Remote list endpoint; GET returns the full collection, POST accepts one quote.
    pub remote_url: String,
    /// Category stamped onto remote records, which carry none of their own.
    pub server_category: String,
    /// Period of the background sync timer.
    pub sync_interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            server_category: DEFAULT_SERVER_CATEGORY.to_string(),
            sync_interval: Duration::from_secs(DEFAULT_SYNC_INTERVAL_SECS),
        }
    }
}

impl SyncConfig {
    /// Build a config from the environment, falling back to defaults for any
    /// unset variable. Every knob has a sensible default, so unlike required
    /// secrets this never fails.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            remote_url: env::var("QUOTESYNC_REMOTE_URL").unwrap_or(defaults.remote_url),
            server_category: env::var("QUOTESYNC_SERVER_CATEGORY")
                .unwrap_or(defaults.server_category),
            sync_interval: env::var("QUOTESYNC_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.sync_interval),
        }
    }
}
