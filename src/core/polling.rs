// src/core/polling.rs
//! Status polling configuration and wait computation

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_POLLING_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_MAX_WAIT_SECS: u64 = 180;
/// Floor applied to every wait, including `Retry-After: 0`
pub const MIN_POLLING_WAIT_SECS: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Wait between polls when the server sends no Retry-After
    pub interval_secs: u64,
    /// Upper bound on the total time spent waiting for a job
    pub max_wait_secs: u64,
    /// Ignore the server's Retry-After and always use `interval_secs`
    pub use_custom_interval: bool,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLLING_INTERVAL_SECS,
            max_wait_secs: DEFAULT_MAX_WAIT_SECS,
            use_custom_interval: false,
        }
    }
}

impl PollingConfig {
    pub fn with_interval_secs(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    pub fn with_max_wait_secs(mut self, secs: u64) -> Self {
        self.max_wait_secs = secs;
        self
    }

    pub fn with_custom_interval(mut self, enabled: bool) -> Self {
        self.use_custom_interval = enabled;
        self
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }

    /// Wait before the next poll, or `None` when `elapsed` plus the wait would
    /// exceed `max_wait`.
    pub fn next_wait(&self, retry_after: Option<u64>, elapsed: Duration) -> Option<Duration> {
        let secs = match retry_after {
            Some(secs) if !self.use_custom_interval => secs,
            _ => self.interval_secs,
        };
        let wait = Duration::from_secs(secs.max(MIN_POLLING_WAIT_SECS));

        match elapsed.checked_add(wait) {
            Some(total) if total <= self.max_wait() => Some(wait),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wait_prefers_retry_after() {
        let config = PollingConfig::default();
        assert_eq!(
            config.next_wait(Some(3), Duration::ZERO),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            config.next_wait(None, Duration::ZERO),
            Some(Duration::from_secs(DEFAULT_POLLING_INTERVAL_SECS))
        );
    }

    #[test]
    fn test_next_wait_custom_interval_ignores_server() {
        let config = PollingConfig::default()
            .with_custom_interval(true)
            .with_interval_secs(2);
        assert_eq!(
            config.next_wait(Some(30), Duration::ZERO),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_next_wait_never_zero() {
        let config = PollingConfig::default().with_interval_secs(0);
        assert_eq!(
            config.next_wait(Some(0), Duration::ZERO),
            Some(Duration::from_secs(MIN_POLLING_WAIT_SECS))
        );
        assert_eq!(
            config.next_wait(None, Duration::ZERO),
            Some(Duration::from_secs(MIN_POLLING_WAIT_SECS))
        );
    }

    #[test]
    fn test_next_wait_huge_retry_after_is_over_budget() {
        let config = PollingConfig::default();
        assert_eq!(config.next_wait(Some(u64::MAX), Duration::from_secs(1)), None);
        assert_eq!(config.next_wait(Some(u64::MAX), Duration::ZERO), None);
    }

    #[test]
    fn test_next_wait_stops_at_max_wait() {
        let config = PollingConfig::default().with_max_wait_secs(20);
        assert_eq!(
            config.next_wait(Some(10), Duration::from_secs(10)),
            Some(Duration::from_secs(10))
        );
        assert_eq!(config.next_wait(Some(10), Duration::from_secs(11)), None);
    }
}
