/// Configuration management for Match Service
///
/// Loads configuration from environment variables (and `.env` when present).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::models::SwipeDirection;
use crate::domain::seed::CURRENT_USER_ID;
use crate::error::ServiceError;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Session settings
    pub session: SessionConfig,
    /// Scripted demo session
    pub demo: DemoConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Emit JSON log lines instead of the human readable format
    pub json_logs: bool,
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// User signed in at startup
    pub current_user_id: String,
    /// Shuffle the deck when the people screen opens
    #[serde(default = "default_shuffle_on_load")]
    pub shuffle_on_load: bool,
    /// Fixed shuffle seed for reproducible decks
    pub shuffle_seed: Option<u64>,
}

/// Demo session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub script: Vec<DemoStep>,
}

/// One action of the scripted people-screen session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoStep {
    Swipe(SwipeDirection),
    Undo,
    Shuffle,
    Message,
    Select,
}

impl FromStr for DemoStep {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "undo" => Ok(DemoStep::Undo),
            "shuffle" => Ok(DemoStep::Shuffle),
            "message" => Ok(DemoStep::Message),
            "select" => Ok(DemoStep::Select),
            other => other
                .parse::<SwipeDirection>()
                .map(DemoStep::Swipe)
                .map_err(|_| ServiceError::Config(format!("unknown demo step '{}'", other))),
        }
    }
}

// Default values
fn default_shuffle_on_load() -> bool {
    true
}

fn default_script() -> Vec<DemoStep> {
    vec![
        DemoStep::Select,
        DemoStep::Swipe(SwipeDirection::Right),
        DemoStep::Swipe(SwipeDirection::Left),
        DemoStep::Undo,
        DemoStep::Message,
        DemoStep::Swipe(SwipeDirection::Up),
        DemoStep::Swipe(SwipeDirection::Right),
    ]
}

pub fn parse_script(raw: &str) -> Result<Vec<DemoStep>, ServiceError> {
    raw.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(DemoStep::from_str)
        .collect()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app = AppConfig {
            env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            json_logs: lookup("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        };

        let session = SessionConfig {
            current_user_id: lookup("BLISS_CURRENT_USER_ID")
                .unwrap_or_else(|| CURRENT_USER_ID.to_string()),
            shuffle_on_load: lookup("BLISS_SHUFFLE_ON_LOAD")
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_shuffle_on_load),
            shuffle_seed: lookup("BLISS_SHUFFLE_SEED").and_then(|s| s.parse().ok()),
        };

        let script = match lookup("BLISS_DEMO_SCRIPT") {
            Some(raw) => parse_script(&raw)?,
            None => default_script(),
        };

        Ok(Config {
            app,
            session,
            demo: DemoConfig { script },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.app.env, "development");
        assert!(!config.app.json_logs);
        assert_eq!(config.session.current_user_id, "99");
        assert!(config.session.shuffle_on_load);
        assert_eq!(config.session.shuffle_seed, None);
        assert_eq!(config.demo.script, default_script());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "staging"),
            ("LOG_FORMAT", "JSON"),
            ("BLISS_CURRENT_USER_ID", "1"),
            ("BLISS_SHUFFLE_ON_LOAD", "false"),
            ("BLISS_SHUFFLE_SEED", "42"),
            ("BLISS_DEMO_SCRIPT", "right, undo,shuffle"),
        ]))
        .unwrap();

        assert_eq!(config.app.env, "staging");
        assert!(config.app.json_logs);
        assert_eq!(config.session.current_user_id, "1");
        assert!(!config.session.shuffle_on_load);
        assert_eq!(config.session.shuffle_seed, Some(42));
        assert_eq!(
            config.demo.script,
            vec![
                DemoStep::Swipe(SwipeDirection::Right),
                DemoStep::Undo,
                DemoStep::Shuffle
            ]
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("BLISS_SHUFFLE_ON_LOAD", "maybe"),
            ("BLISS_SHUFFLE_SEED", "not-a-seed"),
        ]))
        .unwrap();

        assert!(config.session.shuffle_on_load);
        assert_eq!(config.session.shuffle_seed, None);
    }

    #[test]
    fn test_bad_script_token_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("BLISS_DEMO_SCRIPT", "right,sideways")]));
        assert!(result.is_err());
    }
}
