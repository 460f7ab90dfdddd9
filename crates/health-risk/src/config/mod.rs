use crate::workflows::assessment::GuardrailPolicy;
use crate::workflows::intake::{BooleanParsing, CaptureScope};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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

/// Top-level configuration for the profiler service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub profiler: ProfilerConfig,
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

        let boolean_parsing = match env::var("APP_STRICT_BOOLEANS") {
            Ok(raw) if parse_flag("APP_STRICT_BOOLEANS", &raw)? => BooleanParsing::Strict,
            _ => BooleanParsing::Containment,
        };

        let capture_scope = match env::var("APP_LINE_BOUNDED_CAPTURES") {
            Ok(raw) if parse_flag("APP_LINE_BOUNDED_CAPTURES", &raw)? => {
                CaptureScope::LineBounded
            }
            _ => CaptureScope::Spanning,
        };

        let max_missing_ratio = match env::var("APP_MAX_MISSING_RATIO") {
            Ok(raw) => parse_ratio(&raw)?,
            Err(_) => GuardrailPolicy::DEFAULT_MAX_MISSING_RATIO,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            profiler: ProfilerConfig {
                boolean_parsing,
                capture_scope,
                max_missing_ratio,
            },
        })
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

fn parse_ratio(raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidMissingRatio(raw.to_string()))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidMissingRatio(raw.to_string()))
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Dials for the extraction heuristics and the completeness guardrail.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilerConfig {
    pub boolean_parsing: BooleanParsing,
    pub capture_scope: CaptureScope,
    pub max_missing_ratio: f64,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            boolean_parsing: BooleanParsing::Containment,
            capture_scope: CaptureScope::Spanning,
            max_missing_ratio: GuardrailPolicy::DEFAULT_MAX_MISSING_RATIO,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidFlag { name: &'static str, value: String },
    InvalidMissingRatio(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false, found '{value}'")
            }
            ConfigError::InvalidMissingRatio(value) => write!(
                f,
                "APP_MAX_MISSING_RATIO must be a number between 0 and 1, found '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidFlag { .. }
            | ConfigError::InvalidMissingRatio(_) => None,
        }
    }
}
