use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::workflows::broadcast::DEFAULT_BATCH_SIZE;
use crate::workflows::posting::{RetryPolicy, DEFAULT_SESSION_TTL};
use crate::workflows::taxonomy::UnmappedCategoryPolicy;

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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub taxonomy: TaxonomyConfig,
    pub posting: PostingConfig,
    pub broadcast: BroadcastConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");

        let csv_path = env::var("APP_TAXONOMY_CSV")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let raw_policy = var_or("APP_UNMAPPED_CATEGORY_POLICY", "show_all");
        let unmapped_policy = UnmappedCategoryPolicy::parse(&raw_policy)
            .ok_or(ConfigError::InvalidPolicy { value: raw_policy })?;

        let currency = var_or("APP_PAYMENT_CURRENCY", "USD").trim().to_ascii_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCurrency { value: currency });
        }

        let max_attempts = parse_number("APP_JOB_CREATION_MAX_ATTEMPTS", "3")?;
        let backoff_ms = parse_number("APP_JOB_CREATION_BACKOFF_MS", "500")?;
        let session_ttl_minutes = parse_number("APP_POSTING_SESSION_TTL_MINUTES", "1440")?;
        let batch_size = parse_number("APP_BROADCAST_BATCH_SIZE", "100")?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            taxonomy: TaxonomyConfig {
                csv_path,
                unmapped_policy,
            },
            posting: PostingConfig {
                currency,
                max_attempts: u32::try_from(max_attempts).unwrap_or(u32::MAX),
                initial_backoff: Duration::from_millis(backoff_ms),
                session_ttl: Duration::from_secs(session_ttl_minutes.saturating_mul(60)),
            },
            broadcast: BroadcastConfig {
                batch_size: usize::try_from(batch_size).unwrap_or(DEFAULT_BATCH_SIZE),
            },
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Positive integer setting; zero is rejected alongside unparsable input.
fn parse_number(variable: &'static str, default: &str) -> Result<u64, ConfigError> {
    let value = var_or(variable, default);
    match value.trim().parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ConfigError::InvalidNumber { variable, value }),
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

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the question taxonomy comes from and how unknown categories resolve.
#[derive(Debug, Clone)]
pub struct TaxonomyConfig {
    pub csv_path: Option<PathBuf>,
    pub unmapped_policy: UnmappedCategoryPolicy,
}

#[derive(Debug, Clone)]
pub struct PostingConfig {
    pub currency: String,
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    /// Idle posting sessions are evicted after this long.
    pub session_ttl: Duration,
}

impl PostingConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.initial_backoff)
    }
}

impl Default for PostingConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            currency: "USD".to_string(),
            max_attempts: retry.max_attempts,
            initial_backoff: retry.initial_backoff,
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    pub batch_size: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPolicy { value: String },
    InvalidCurrency { value: String },
    InvalidNumber { variable: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPolicy { value } => write!(
                f,
                "APP_UNMAPPED_CATEGORY_POLICY must be show_all or show_none (got '{value}')"
            ),
            ConfigError::InvalidCurrency { value } => write!(
                f,
                "APP_PAYMENT_CURRENCY must be a three-letter currency code (got '{value}')"
            ),
            ConfigError::InvalidNumber { variable, value } => {
                write!(f, "{variable} must be a positive integer (got '{value}')")
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

    const VARIABLES: [&str; 11] = [
        "APP_ENV",
        "APP_HOST",
        "APP_PORT",
        "APP_LOG_LEVEL",
        "APP_TAXONOMY_CSV",
        "APP_UNMAPPED_CATEGORY_POLICY",
        "APP_PAYMENT_CURRENCY",
        "APP_JOB_CREATION_MAX_ATTEMPTS",
        "APP_JOB_CREATION_BACKOFF_MS",
        "APP_POSTING_SESSION_TTL_MINUTES",
        "APP_BROADCAST_BATCH_SIZE",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for variable in VARIABLES {
            env::remove_var(variable);
        }
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
        assert!(config.taxonomy.csv_path.is_none());
        assert_eq!(config.taxonomy.unmapped_policy, UnmappedCategoryPolicy::ShowAll);
        assert_eq!(config.posting.currency, "USD");
        assert_eq!(config.posting.retry_policy(), RetryPolicy::default());
        assert_eq!(config.posting.session_ttl, DEFAULT_SESSION_TTL);
        assert_eq!(config.broadcast.batch_size, 100);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_posting_and_broadcast_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_UNMAPPED_CATEGORY_POLICY", "show_none");
        env::set_var("APP_PAYMENT_CURRENCY", "aud");
        env::set_var("APP_JOB_CREATION_MAX_ATTEMPTS", "5");
        env::set_var("APP_JOB_CREATION_BACKOFF_MS", "250");
        env::set_var("APP_BROADCAST_BATCH_SIZE", "20");
        env::set_var("APP_POSTING_SESSION_TTL_MINUTES", "30");
        env::set_var("APP_TAXONOMY_CSV", "data/taxonomy.csv");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.taxonomy.unmapped_policy, UnmappedCategoryPolicy::ShowNone);
        assert_eq!(
            config.taxonomy.csv_path,
            Some(PathBuf::from("data/taxonomy.csv"))
        );
        assert_eq!(config.posting.currency, "AUD");
        assert_eq!(config.posting.max_attempts, 5);
        assert_eq!(config.posting.initial_backoff, Duration::from_millis(250));
        assert_eq!(config.posting.session_ttl, Duration::from_secs(30 * 60));
        assert_eq!(config.broadcast.batch_size, 20);
        reset_env();
    }

    #[test]
    fn rejects_invalid_values_naming_the_variable() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_BROADCAST_BATCH_SIZE", "0");
        let error = AppConfig::load().expect_err("zero batch size rejected");
        assert!(error.to_string().starts_with("APP_BROADCAST_BATCH_SIZE"));

        reset_env();
        env::set_var("APP_UNMAPPED_CATEGORY_POLICY", "sometimes");
        let error = AppConfig::load().expect_err("unknown policy rejected");
        assert!(matches!(error, ConfigError::InvalidPolicy { .. }));

        reset_env();
        env::set_var("APP_PAYMENT_CURRENCY", "dollars");
        let error = AppConfig::load().expect_err("bad currency rejected");
        assert!(matches!(error, ConfigError::InvalidCurrency { .. }));
        reset_env();
    }
}
