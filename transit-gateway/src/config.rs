//! Gateway configuration.
//!
//! Everything is read from environment variables; anything unset falls back
//! to a default that reproduces the public deployment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::StationCode;
use crate::metro::MetroConfig;
use crate::railway::{RailwayConfig, TicketQuery};

/// Default listening port.
const DEFAULT_PORT: u16 = 3000;

/// Default directory for static assets.
const DEFAULT_STATIC_DIR: &str = "public";

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Complete gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to bind the HTTP listener to
    pub bind_addr: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory served for paths no route handles
    pub static_dir: PathBuf,
    /// Railway client settings
    pub railway: RailwayConfig,
    /// The date and station pair queried by the railway endpoint
    pub ticket_query: TicketQuery,
    /// Metro client settings
    pub metro: MetroConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            railway: RailwayConfig::default(),
            ticket_query: TicketQuery {
                train_date: NaiveDate::from_ymd_opt(2025, 9, 21).unwrap_or_default(),
                from_station: StationCode::SHENZHEN_NORTH,
                to_station: StationCode::HONG_KONG_WEST_KOWLOON,
            },
            metro: MetroConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| (var, v))
        };

        if let Some((var, v)) = get("PORT") {
            config.port = parse(var, &v)?;
        }
        if let Some((var, v)) = get("BIND_ADDR") {
            config.bind_addr = parse(var, &v)?;
        }
        if let Some((_, v)) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(v);
        }

        if let Some((_, v)) = get("RAILWAY_BASE_URL") {
            config.railway = config.railway.with_base_url(v);
        }
        if let Some((var, v)) = get("RAILWAY_ACCEPT_INVALID_CERTS") {
            config.railway = config.railway.with_accept_invalid_certs(parse_bool(var, &v)?);
        }
        if let Some((var, v)) = get("RAILWAY_TRAIN_DATE") {
            config.ticket_query.train_date =
                NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|e| invalid(var, &v, e))?;
        }
        if let Some((var, v)) = get("RAILWAY_FROM_STATION") {
            config.ticket_query.from_station =
                StationCode::parse_normalized(&v).map_err(|e| invalid(var, &v, e))?;
        }
        if let Some((var, v)) = get("RAILWAY_TO_STATION") {
            config.ticket_query.to_station =
                StationCode::parse_normalized(&v).map_err(|e| invalid(var, &v, e))?;
        }

        if let Some((_, v)) = get("METRO_BASE_URL") {
            config.metro = config.metro.with_base_url(v);
        }

        if let Some((var, v)) = get("UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = parse(var, &v)?;
            config.railway = config.railway.with_timeout(secs);
            config.metro = config.metro.with_timeout(secs);
        }

        Ok(config)
    }

    /// The socket address to listen on.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn invalid(var: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    value.parse().map_err(|e| invalid(var, value, e))
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, value, "expected true or false")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let config = from_vars(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.ticket_query.train_date.to_string(), "2025-09-21");
        assert_eq!(config.ticket_query.from_station.as_str(), "IOQ");
        assert_eq!(config.ticket_query.to_station.as_str(), "XJA");
        assert!(config.railway.accept_invalid_certs);
        assert_eq!(config.metro.base_url, "https://rt.data.gov.hk");
    }

    #[test]
    fn overrides() {
        let config = from_vars(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("STATIC_DIR", "/srv/www"),
            ("RAILWAY_BASE_URL", "http://rail.test"),
            ("RAILWAY_ACCEPT_INVALID_CERTS", "false"),
            ("RAILWAY_TRAIN_DATE", "2026-01-02"),
            ("RAILWAY_FROM_STATION", "xja"),
            ("RAILWAY_TO_STATION", "IOQ"),
            ("METRO_BASE_URL", "http://metro.test"),
            ("UPSTREAM_TIMEOUT_SECS", "7"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.railway.base_url, "http://rail.test");
        assert!(!config.railway.accept_invalid_certs);
        assert_eq!(config.ticket_query.train_date.to_string(), "2026-01-02");
        assert_eq!(config.ticket_query.from_station.as_str(), "XJA");
        assert_eq!(config.ticket_query.to_station.as_str(), "IOQ");
        assert_eq!(config.metro.base_url, "http://metro.test");
        assert_eq!(config.railway.timeout_secs, 7);
        assert_eq!(config.metro.timeout_secs, 7);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = from_vars(&[("PORT", "  ")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn invalid_port() {
        let err = from_vars(&[("PORT", "http")]).unwrap_err();
        assert_eq!(err.var, "PORT");
        assert_eq!(err.value, "http");
    }

    #[test]
    fn invalid_station() {
        let err = from_vars(&[("RAILWAY_FROM_STATION", "SZN1")]).unwrap_err();
        assert_eq!(err.var, "RAILWAY_FROM_STATION");
        assert!(err.to_string().contains("invalid station code"));
    }

    #[test]
    fn invalid_bool() {
        let err = from_vars(&[("RAILWAY_ACCEPT_INVALID_CERTS", "maybe")]).unwrap_err();
        assert_eq!(err.reason, "expected true or false");
    }

    #[test]
    fn invalid_date() {
        assert!(from_vars(&[("RAILWAY_TRAIN_DATE", "21/09/2025")]).is_err());
    }
}
