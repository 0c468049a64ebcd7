use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::assessment::scoring::CategoryWeights;
use crate::assessment::{AssessmentConfig, DEFAULT_ADVICE_LIMIT};

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

/// Top-level configuration for the service and the scoring policy it applies.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: load_assessment_config()?,
        })
    }
}

/// Apply `QH_*` overrides on top of the published scoring policy.
fn load_assessment_config() -> Result<AssessmentConfig, ConfigError> {
    let mut config = AssessmentConfig::default();

    let defaults = config.scoring.categories;
    let categories = CategoryWeights {
        diet: weight_var("QH_WEIGHT_DIET", defaults.diet)?,
        sleep: weight_var("QH_WEIGHT_SLEEP", defaults.sleep)?,
        activity: weight_var("QH_WEIGHT_ACTIVITY", defaults.activity)?,
        mental: weight_var("QH_WEIGHT_MENTAL", defaults.mental)?,
    };
    if !categories.is_valid() {
        return Err(ConfigError::InvalidWeights {
            total: categories.total(),
        });
    }
    config.scoring.categories = categories;

    config.advice_limit = match env::var("QH_ADVICE_LIMIT") {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidAdviceLimit)?,
        Err(_) => DEFAULT_ADVICE_LIMIT,
    };

    Ok(config)
}

fn weight_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidWeight { name }),
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

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidWeight { name: &'static str },
    InvalidWeights { total: f64 },
    InvalidAdviceLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWeight { name } => write!(f, "{name} must be a decimal number"),
            ConfigError::InvalidWeights { total } => write!(
                f,
                "category weights must be non-negative and sum to 1.0 (found {total:.3})"
            ),
            ConfigError::InvalidAdviceLimit => {
                write!(f, "QH_ADVICE_LIMIT must be a non-negative integer")
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
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "QH_WEIGHT_DIET",
            "QH_WEIGHT_SLEEP",
            "QH_WEIGHT_ACTIVITY",
            "QH_WEIGHT_MENTAL",
            "QH_ADVICE_LIMIT",
        ] {
            env::remove_var(name);
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
        assert_eq!(config.assessment, AssessmentConfig::default());
    }

    #[test]
    fn scoring_weights_can_be_overridden() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("QH_WEIGHT_DIET", "0.25");
        env::set_var("QH_WEIGHT_SLEEP", "0.25");
        env::set_var("QH_WEIGHT_ACTIVITY", "0.25");
        env::set_var("QH_WEIGHT_MENTAL", "0.25");
        env::set_var("QH_ADVICE_LIMIT", "3");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.assessment.scoring.categories.diet, 0.25);
        assert_eq!(config.assessment.scoring.categories.mental, 0.25);
        assert_eq!(config.assessment.advice_limit, 3);
        reset_env();
    }

    #[test]
    fn rejects_weights_that_do_not_sum_to_one() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("QH_WEIGHT_DIET", "0.9");

        let error = AppConfig::load().expect_err("weights rejected");
        assert!(matches!(error, ConfigError::InvalidWeights { .. }));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("QH_WEIGHT_SLEEP", "heavy");

        let error = AppConfig::load().expect_err("weight rejected");
        assert!(matches!(
            error,
            ConfigError::InvalidWeight {
                name: "QH_WEIGHT_SLEEP"
            }
        ));
        reset_env();
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
}
