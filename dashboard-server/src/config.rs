//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// ONNX export of the freshness classifier
    pub model_path: PathBuf,

    /// Sessions idle for longer than this are dropped
    pub session_idle_minutes: i64,

    /// Upper bound on concurrently open sessions
    pub max_sessions: usize,

    /// Seed for every new session's random source (reproducible demos)
    pub rng_seed: Option<u64>,

    /// Log output format ("text" or "json")
    pub log_format: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            model_path: PathBuf::from("freshness_predictor_model.onnx"),
            session_idle_minutes: 120,
            max_sessions: 1000,
            rng_seed: None,
            log_format: "text".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),

            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(defaults.session_idle_minutes),

            max_sessions: env::var("MAX_SESSIONS")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m: &usize| *m > 0)
                .unwrap_or(defaults.max_sessions),

            rng_seed: env::var("RNG_SEED")
                .ok()
                .and_then(|s| s.parse().ok()),

            log_format: env::var("LOG_FORMAT")
                .unwrap_or(defaults.log_format),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
