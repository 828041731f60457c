//! Configuration for the store connection and the aggregation queries.
//!
//! Read once at process start and passed by handle; nothing here is re-read
//! per call.

use crate::error::{Error, Result};

/// Default number of openings fetched per user.
pub const DEFAULT_OPENING_FETCH_LIMIT: usize = 5;

/// Default number of applications fetched per opening.
pub const DEFAULT_APPLICATION_FETCH_LIMIT: usize = 50;

/// Default schedule lookahead window in days.
pub const DEFAULT_SCHEDULE_WINDOW_DAYS: i64 = 7;

/// Default cap on concurrent per-opening application fetches.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

/// Connection settings for the document store.
///
/// Consumed by whichever store backend is wired in at process start; the
/// query layer itself never reads these.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store endpoint URI.
    pub endpoint: String,
    /// Resource access key.
    pub access_key: String,
    /// Database holding the recruiting collections.
    pub database: String,
    /// Container holding openings and applications.
    pub common_container: String,
    /// Container holding interview schedules.
    pub schedule_container: String,
}

impl StoreConfig {
    /// Read the connection settings from `TALENT_STORE_*` environment
    /// variables. Container names default; endpoint and key do not.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            endpoint: std::env::var("TALENT_STORE_ENDPOINT").unwrap_or_default(),
            access_key: std::env::var("TALENT_STORE_KEY").unwrap_or_default(),
            database: std::env::var("TALENT_STORE_DATABASE")
                .unwrap_or_else(|_| "recruiting".to_string()),
            common_container: std::env::var("TALENT_STORE_COMMON_CONTAINER")
                .unwrap_or_else(|_| "recruiting-core".to_string()),
            schedule_container: std::env::var("TALENT_STORE_SCHEDULE_CONTAINER")
                .unwrap_or_else(|_| "interview-schedules".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::Config("store endpoint is not set".to_string()));
        }
        if self.access_key.is_empty() {
            return Err(Error::Config("store access key is not set".to_string()));
        }
        if self.database.is_empty() {
            return Err(Error::Config("store database is not set".to_string()));
        }
        Ok(())
    }
}

/// Tunables for the aggregation queries.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Database holding the recruiting collections.
    pub database: String,
    /// Container holding openings and applications.
    pub common_container: String,
    /// Container holding interview schedules.
    pub schedule_container: String,
    /// Openings fetched per user (offset 0).
    pub opening_fetch_limit: usize,
    /// Applications fetched per opening (offset 0).
    pub application_fetch_limit: usize,
    /// Schedule lookahead window, in days.
    pub schedule_window_days: i64,
    /// Cap on concurrent per-opening application fetches.
    pub max_concurrent_fetches: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            database: "recruiting".to_string(),
            common_container: "recruiting-core".to_string(),
            schedule_container: "interview-schedules".to_string(),
            opening_fetch_limit: DEFAULT_OPENING_FETCH_LIMIT,
            application_fetch_limit: DEFAULT_APPLICATION_FETCH_LIMIT,
            schedule_window_days: DEFAULT_SCHEDULE_WINDOW_DAYS,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

impl QueryConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read tunables from `TALENT_QUERY_*` environment variables (with
    /// defaults).
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `TALENT_QUERY_OPENING_LIMIT` | `5` | Openings fetched per user |
    /// | `TALENT_QUERY_APPLICATION_LIMIT` | `50` | Applications per opening |
    /// | `TALENT_QUERY_SCHEDULE_WINDOW_DAYS` | `7` | Schedule lookahead |
    /// | `TALENT_QUERY_MAX_CONCURRENT` | `4` | Fan-out concurrency cap |
    pub fn from_env() -> Self {
        fn parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
            std::env::var(name)
                .ok()
                .and_then(|v| v.parse::<T>().ok())
                .unwrap_or(default)
        }

        let mut config = Self::default();
        if let Ok(database) = std::env::var("TALENT_STORE_DATABASE") {
            config.database = database;
        }
        if let Ok(container) = std::env::var("TALENT_STORE_COMMON_CONTAINER") {
            config.common_container = container;
        }
        if let Ok(container) = std::env::var("TALENT_STORE_SCHEDULE_CONTAINER") {
            config.schedule_container = container;
        }
        config.opening_fetch_limit =
            parsed("TALENT_QUERY_OPENING_LIMIT", DEFAULT_OPENING_FETCH_LIMIT);
        config.application_fetch_limit = parsed(
            "TALENT_QUERY_APPLICATION_LIMIT",
            DEFAULT_APPLICATION_FETCH_LIMIT,
        );
        config.schedule_window_days = parsed(
            "TALENT_QUERY_SCHEDULE_WINDOW_DAYS",
            DEFAULT_SCHEDULE_WINDOW_DAYS,
        );
        config.max_concurrent_fetches =
            parsed("TALENT_QUERY_MAX_CONCURRENT", DEFAULT_MAX_CONCURRENT_FETCHES).max(1);
        config
    }

    /// Set the opening fetch limit.
    pub fn with_opening_fetch_limit(mut self, limit: usize) -> Self {
        self.opening_fetch_limit = limit;
        self
    }

    /// Set the per-opening application fetch limit.
    pub fn with_application_fetch_limit(mut self, limit: usize) -> Self {
        self.application_fetch_limit = limit;
        self
    }

    /// Set the schedule lookahead window in days.
    pub fn with_schedule_window_days(mut self, days: i64) -> Self {
        self.schedule_window_days = days;
        self
    }

    /// Set the fan-out concurrency cap (floor of 1).
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_config_defaults() {
        let config = QueryConfig::default();
        assert_eq!(config.opening_fetch_limit, 5);
        assert_eq!(config.application_fetch_limit, 50);
        assert_eq!(config.schedule_window_days, 7);
        assert_eq!(config.max_concurrent_fetches, 4);
    }

    #[test]
    fn test_query_config_builder() {
        let config = QueryConfig::new()
            .with_opening_fetch_limit(10)
            .with_application_fetch_limit(25)
            .with_schedule_window_days(14)
            .with_max_concurrent_fetches(0);

        assert_eq!(config.opening_fetch_limit, 10);
        assert_eq!(config.application_fetch_limit, 25);
        assert_eq!(config.schedule_window_days, 14);
        // Concurrency cap never drops below one
        assert_eq!(config.max_concurrent_fetches, 1);
    }

    #[test]
    fn test_store_config_validate() {
        let config = StoreConfig {
            endpoint: "https://store.example".to_string(),
            access_key: String::new(),
            database: "recruiting".to_string(),
            common_container: "recruiting-core".to_string(),
            schedule_container: "interview-schedules".to_string(),
        };

        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
