use crate::error::SessionError;
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_MAX_SETTLE_PASSES, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH,
};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub height: usize,
    pub width: usize,
    /// `None` seeds from the clock
    pub seed: Option<u32>,
    pub max_settle_passes: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            seed: None,
            max_settle_passes: DEFAULT_MAX_SETTLE_PASSES,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `MATCH3_HEIGHT`, `MATCH3_WIDTH`: board size (default 8x8)
    /// - `MATCH3_SEED`: fixed RNG seed
    /// - `MATCH3_MAX_PASSES`: settle pass cap
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse().ok());

        Self {
            height: parse("MATCH3_HEIGHT").unwrap_or(defaults.height),
            width: parse("MATCH3_WIDTH").unwrap_or(defaults.width),
            seed: lookup("MATCH3_SEED").and_then(|s| s.trim().parse().ok()),
            max_settle_passes: lookup("MATCH3_MAX_PASSES")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_settle_passes),
        }
    }

    /// Check the board dimensions
    pub fn validate(&self) -> Result<(), SessionError> {
        validate_dimensions(self.height, self.width)
    }
}

pub(crate) fn validate_dimensions(height: usize, width: usize) -> Result<(), SessionError> {
    if !(1..=MAX_HEIGHT).contains(&height) || !(1..=MAX_WIDTH).contains(&width) {
        return Err(SessionError::InvalidDimensions { height, width });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SessionConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SessionConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_overrides() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("MATCH3_HEIGHT", "5"),
            ("MATCH3_WIDTH", " 6 "),
            ("MATCH3_SEED", "42"),
            ("MATCH3_MAX_PASSES", "50"),
        ]));
        assert_eq!(config.height, 5);
        assert_eq!(config.width, 6);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_settle_passes, 50);
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("MATCH3_HEIGHT", "tall"),
            ("MATCH3_SEED", "-3"),
        ]));
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        for (h, w) in [(0, 8), (8, 0), (27, 8), (8, 100)] {
            let config = SessionConfig {
                height: h,
                width: w,
                ..SessionConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(SessionError::InvalidDimensions {
                    height: h,
                    width: w
                })
            );
        }
    }
}
