//! Engine tunables.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Completed topics required to reveal the Explore feed.
pub const UNLOCK_THRESHOLD: usize = 2;

/// Points awarded when a topic is completed for the first time.
pub const POINTS_PER_COMPLETION: u32 = 10;

/// Maximum length of the recommended feed.
pub const RECOMMENDED_COUNT: usize = 3;

/// Points needed to climb one level.
pub const POINTS_PER_LEVEL: u32 = 100;

/// Entries shown in "recently completed".
pub const RECENT_LIMIT: usize = 3;

/// Configuration for ranking and progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Completed topics required to unlock Explore
    pub unlock_threshold: usize,

    /// Points per first-time completion
    pub points_per_completion: u32,

    /// Recommended feed length
    pub recommended_count: usize,

    /// Points per level
    pub points_per_level: u32,

    /// Recently completed list length
    pub recent_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            unlock_threshold: UNLOCK_THRESHOLD,
            points_per_completion: POINTS_PER_COMPLETION,
            recommended_count: RECOMMENDED_COUNT,
            points_per_level: POINTS_PER_LEVEL,
            recent_limit: RECENT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `MIND_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = env_parse("MIND_UNLOCK_THRESHOLD")? {
            config.unlock_threshold = v;
        }
        if let Some(v) = env_parse("MIND_POINTS_PER_COMPLETION")? {
            config.points_per_completion = v;
        }
        if let Some(v) = env_parse("MIND_RECOMMENDED_COUNT")? {
            config.recommended_count = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the progress math cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.points_per_level == 0 {
            return Err(Error::Config("points_per_level must be positive".into()));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("invalid {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}
