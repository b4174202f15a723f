//! Loop timing configuration.

use std::env;
use std::time::Duration;

use crate::core::Pacing;
use crate::types::{KEY_RELEASE_TIMEOUT_MS, LOSS_PAUSE_MS, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Delay after an ordinary tick.
    pub tick_ms: u64,
    /// Delay after a tick that lost a life.
    pub loss_pause_ms: u64,
    /// Auto-release timeout for terminals without key release events.
    pub key_release_timeout_ms: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            loss_pause_ms: LOSS_PAUSE_MS,
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl LoopConfig {
    /// Read `ARCADE_TICK_MS`, `ARCADE_LOSS_PAUSE_MS` and `ARCADE_KEY_RELEASE_MS`.
    /// Missing or unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |name: &str, default: u64| {
            lookup(name)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            tick_ms: read("ARCADE_TICK_MS", defaults.tick_ms),
            loss_pause_ms: read("ARCADE_LOSS_PAUSE_MS", defaults.loss_pause_ms),
            key_release_timeout_ms: read("ARCADE_KEY_RELEASE_MS", defaults.key_release_timeout_ms),
        }
    }

    pub fn delay(&self, pacing: Pacing) -> Duration {
        match pacing {
            Pacing::Normal => Duration::from_millis(self.tick_ms),
            Pacing::LossPause => Duration::from_millis(self.loss_pause_ms),
        }
    }

    pub fn key_release_timeout(&self) -> Duration {
        Duration::from_millis(self.key_release_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_original_timings() {
        let config = LoopConfig::default();
        assert_eq!(config.delay(Pacing::Normal), Duration::from_millis(50));
        assert_eq!(config.delay(Pacing::LossPause), Duration::from_millis(500));
        assert_eq!(config.key_release_timeout(), Duration::from_millis(150));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = LoopConfig::from_lookup(lookup(&[
            ("ARCADE_TICK_MS", "20"),
            ("ARCADE_LOSS_PAUSE_MS", " 900 "),
        ]));
        assert_eq!(config.tick_ms, 20);
        assert_eq!(config.loss_pause_ms, 900);
        assert_eq!(config.key_release_timeout_ms, KEY_RELEASE_TIMEOUT_MS);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = LoopConfig::from_lookup(lookup(&[
            ("ARCADE_TICK_MS", "fast"),
            ("ARCADE_KEY_RELEASE_MS", "-3"),
        ]));
        assert_eq!(config, LoopConfig::default());
    }
}
