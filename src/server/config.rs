use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,

    /// Origins allowed to call the API from a browser.
    pub cors_allowed_origins: Vec<String>,

    /// Credentials for the superuser created on first start.
    pub superuser_username: Option<String>,
    pub superuser_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGINS.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: parse_listen_addr(&listen_addr)?,
            cors_allowed_origins: split_origins(&cors_allowed_origins),
            superuser_username: non_empty_var("SUPERUSER_USERNAME"),
            superuser_password: non_empty_var("SUPERUSER_PASSWORD"),
        })
    }
}

fn parse_listen_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
        name: "LISTEN_ADDR".to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_origins() {
        let origins = split_origins(" http://a.test , ,http://b.test");

        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn rejects_unparseable_listen_addr() {
        let result = parse_listen_addr("localhost");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "LISTEN_ADDR"
        ));
    }

    #[test]
    fn parses_default_listen_addr() {
        let addr = parse_listen_addr(DEFAULT_LISTEN_ADDR).unwrap();

        assert_eq!(addr.port(), 8000);
    }
}
