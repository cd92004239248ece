//! Server configuration loaded from the environment

use anyhow::{Context, bail};
use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 31113;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub addr: SocketAddr,
    pub max_connections: u32,
    pub frontend_origins: Vec<HeaderValue>,
    pub run_migrations: bool,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .context("DATABASE_URL must be set in environment")?;

        let host: IpAddr = lookup("API_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse()
            .context("API_HOST must be an IP address")?;

        let port = match lookup("API_PORT") {
            Some(port) => port.parse().context("API_PORT must be a port number")?,
            None => DEFAULT_PORT,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(max) => max
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be a positive integer");
        }

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid origin in FRONTEND_ORIGINS: {origin}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(flag) => parse_flag(&flag).context("RUN_MIGRATIONS must be true or false")?,
            None => true,
        };

        Ok(Self {
            database_url,
            addr: SocketAddr::new(host, port),
            max_connections,
            frontend_origins,
            run_migrations,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/pets")]).unwrap();

        assert_eq!(config.addr, "0.0.0.0:31113".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.frontend_origins.len(), 2);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/pets"),
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("FRONTEND_ORIGINS", "https://pets.example.com, "),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.frontend_origins.len(), 1);
        assert_eq!(config.frontend_origins[0], "https://pets.example.com");
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(load(&[]).is_err());

        let cases = [
            ("API_PORT", "not-a-port"),
            ("API_HOST", "localhost:80"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
            ("RUN_MIGRATIONS", "maybe"),
        ];
        for (key, value) in cases {
            let result = load(&[("DATABASE_URL", "postgres://db/pets"), (key, value)]);
            assert!(result.is_err(), "{key}={value} should be rejected");
        }
    }
}
