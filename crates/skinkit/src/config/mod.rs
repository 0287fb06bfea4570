use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::workflows::skincare::recommendation::RecommendationConfig;

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
    pub analysis: AnalysisConfig,
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

        let defaults = RecommendationConfig::default();
        let ttl_secs = numeric_var("ANALYSIS_TTL_SECS", DEFAULT_ANALYSIS_TTL_SECS)?;
        if ttl_secs > MAX_ANALYSIS_TTL_SECS {
            return Err(ConfigError::TtlOutOfRange {
                value: ttl_secs,
                max: MAX_ANALYSIS_TTL_SECS,
            });
        }
        let recommendation_limit =
            numeric_var("RECOMMENDATION_LIMIT", defaults.recommendation_limit as u64)?;
        let kit_pool_limit = numeric_var("KIT_POOL_LIMIT", defaults.kit_pool_limit as u64)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            analysis: AnalysisConfig {
                ttl_secs,
                recommendation: RecommendationConfig::new(
                    recommendation_limit as usize,
                    kit_pool_limit as usize,
                    defaults.bundle_discount_rate,
                ),
            },
        })
    }
}

fn numeric_var(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        Err(_) => Ok(default),
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

const DEFAULT_ANALYSIS_TTL_SECS: u64 = 3600;
/// Thirty days.
pub const MAX_ANALYSIS_TTL_SECS: u64 = 30 * 24 * 3600;

/// Retention of stored analyses and the recommendation dials.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub ttl_secs: u64,
    pub recommendation: RecommendationConfig,
}

impl AnalysisConfig {
    /// Retention window, capped at [`MAX_ANALYSIS_TTL_SECS`].
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.ttl_secs.min(MAX_ANALYSIS_TTL_SECS) as i64)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_ANALYSIS_TTL_SECS,
            recommendation: RecommendationConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { name: &'static str, value: String },
    TtlOutOfRange { value: u64, max: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be a non-negative integer (found '{value}')")
            }
            ConfigError::TtlOutOfRange { value, max } => {
                write!(f, "ANALYSIS_TTL_SECS must be at most {max} (found {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::TtlOutOfRange { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
