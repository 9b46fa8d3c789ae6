use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_PORT: u16 = 3000;

/// Deployment stage the scoring service runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Settings for an embedding of the scorer, read from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Loads `.env` if present, then reads `APP_*` variables with defaults.
    ///
    /// `PORT` is consulted when `APP_PORT` is unset.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            AppEnvironment::parse(&env::var("APP_ENV").unwrap_or_else(|_| "development".into()));

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("APP_PORT").or_else(|_| env::var("PORT")) {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

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
            .map_err(|source| ConfigError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter fallback used when `RUST_LOG` is absent.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16, got '{value}'")]
    InvalidPort { value: String },
    #[error("APP_HOST '{host}' must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
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
        for key in ["APP_ENV", "APP_HOST", "APP_PORT", "PORT", "APP_LOG_LEVEL"] {
            env::remove_var(key);
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
    fn falls_back_to_plain_port_variable() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PORT", "8081");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.server.port, 8081);

        env::set_var("APP_PORT", "9090");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.server.port, 9090);
        reset_env();
    }

    #[test]
    fn rejects_invalid_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "not-a-port");
        let err = AppConfig::load().expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "not-a-port"));
        reset_env();
    }

    #[test]
    fn environment_aliases_are_recognized() {
        assert_eq!(AppEnvironment::parse("PROD"), AppEnvironment::Production);
        assert_eq!(AppEnvironment::parse(" ci "), AppEnvironment::Test);
        assert_eq!(AppEnvironment::parse("staging"), AppEnvironment::Development);
    }

    #[test]
    fn rejects_unparseable_host() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }
}
