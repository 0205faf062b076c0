use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::localization::Locale;
use crate::matching::{MatchConfig, ScoringStrategyKind};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub sessions: SessionConfig,
    pub matching: MatchConfig,
    /// Catalog file to load instead of the bundled set, chosen by extension.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let locale = match env::var("APP_LOCALE") {
            Ok(code) => Locale::from_code(&code).ok_or(ConfigError::UnknownLocale { code })?,
            Err(_) => Locale::default(),
        };

        let typing_delay_ms = env::var("APP_TYPING_DELAY_MS")
            .unwrap_or_else(|_| "900".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTypingDelay)?;

        let minimum_score = match env::var("APP_MIN_MATCH_SCORE") {
            Ok(raw) => Some(
                raw.parse::<u8>()
                    .ok()
                    .filter(|score| *score <= 100)
                    .ok_or(ConfigError::InvalidMinimumScore { raw })?,
            ),
            Err(_) => None,
        };

        let strategy = match env::var("APP_SCORING") {
            Ok(name) => ScoringStrategyKind::from_name(&name)
                .ok_or(ConfigError::UnknownScoringStrategy { name })?,
            Err(_) => ScoringStrategyKind::default(),
        };

        let catalog_path = env::var("APP_CATALOG_PATH").ok().map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            sessions: SessionConfig {
                default_locale: locale,
                typing_delay: Duration::from_millis(typing_delay_ms),
            },
            matching: MatchConfig {
                minimum_score,
                strategy,
            },
            catalog_path,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Conversation defaults handed to the session service.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub default_locale: Locale,
    /// Artificial composing pause before each prompt. Zero delivers inline.
    pub typing_delay: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    UnknownLocale { code: String },
    InvalidTypingDelay,
    InvalidMinimumScore { raw: String },
    UnknownScoringStrategy { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::UnknownLocale { code } => {
                write!(f, "APP_LOCALE '{code}' is not a supported locale")
            }
            ConfigError::InvalidTypingDelay => {
                write!(f, "APP_TYPING_DELAY_MS must be a non-negative integer")
            }
            ConfigError::InvalidMinimumScore { raw } => {
                write!(f, "APP_MIN_MATCH_SCORE '{raw}' must be an integer 0-100")
            }
            ConfigError::UnknownScoringStrategy { name } => {
                write!(f, "APP_SCORING '{name}' is not a known strategy")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_LOCALE");
        env::remove_var("APP_TYPING_DELAY_MS");
        env::remove_var("APP_MIN_MATCH_SCORE");
        env::remove_var("APP_SCORING");
        env::remove_var("APP_CATALOG_PATH");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.sessions.default_locale, Locale::En);
        assert_eq!(config.sessions.typing_delay, Duration::from_millis(900));
        assert!(config.matching.minimum_score.is_none());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn session_and_matching_settings_come_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_LOCALE", "hi");
        env::set_var("APP_TYPING_DELAY_MS", "0");
        env::set_var("APP_MIN_MATCH_SCORE", "60");
        env::set_var("APP_SCORING", "rules");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.sessions.default_locale, Locale::Hi);
        assert!(config.sessions.typing_delay.is_zero());
        assert_eq!(config.matching.minimum_score, Some(60));
        assert_eq!(config.matching.strategy, ScoringStrategyKind::Rules);
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_minimum_score() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MIN_MATCH_SCORE", "140");
        match AppConfig::load() {
            Err(ConfigError::InvalidMinimumScore { raw }) => assert_eq!(raw, "140"),
            other => panic!("expected minimum score error, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn rejects_unknown_scoring_strategy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SCORING", "oracle");
        match AppConfig::load() {
            Err(ConfigError::UnknownScoringStrategy { name }) => assert_eq!(name, "oracle"),
            other => panic!("expected scoring strategy error, got {other:?}"),
        }
        reset_env();
    }
}
