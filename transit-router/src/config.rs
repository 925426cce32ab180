//! Process configuration.
//!
//! Everything is read from `TRANSIT_*` environment variables at startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::journey::PlannerConfig;

const GRAPH_PATH: &str = "TRANSIT_GRAPH_PATH";
const FARES_PATH: &str = "TRANSIT_FARES_PATH";
const BIND_ADDR: &str = "TRANSIT_BIND_ADDR";
const REQUEST_TIMEOUT_SECS: &str = "TRANSIT_REQUEST_TIMEOUT_SECS";
const NEAREST_K: &str = "TRANSIT_NEAREST_K";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable could not be parsed
    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON graph snapshot to serve
    pub graph_path: PathBuf,
    /// JSON fare profiles; the default profile is used when unset
    pub fares_path: Option<PathBuf>,
    pub bind_addr: SocketAddr,
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let graph_path = get(GRAPH_PATH)
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(GRAPH_PATH))?;
        let fares_path = get(FARES_PATH).map(PathBuf::from);

        let bind_addr = parse(BIND_ADDR, get(BIND_ADDR).as_deref().unwrap_or(DEFAULT_BIND_ADDR))?;

        let mut planner = PlannerConfig::default();
        if let Some(raw) = get(REQUEST_TIMEOUT_SECS) {
            let secs: u64 = parse(REQUEST_TIMEOUT_SECS, &raw)?;
            if secs == 0 {
                return Err(invalid(REQUEST_TIMEOUT_SECS, &raw, "must be at least 1"));
            }
            planner.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = get(NEAREST_K) {
            let k: usize = parse(NEAREST_K, &raw)?;
            if k == 0 {
                return Err(invalid(NEAREST_K, &raw, "must be at least 1"));
            }
            planner.nearest_k = k;
        }

        Ok(Self {
            graph_path,
            fares_path,
            bind_addr,
            planner,
        })
    }
}

fn parse<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| invalid(name, raw, &e.to_string()))
}

fn invalid(name: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn default_config() {
        let config = config(&[("TRANSIT_GRAPH_PATH", "/data/graph.json")]).unwrap();

        assert_eq!(config.graph_path, PathBuf::from("/data/graph.json"));
        assert_eq!(config.fares_path, None);
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.planner, PlannerConfig::default());
    }

    #[test]
    fn custom_config() {
        let config = config(&[
            ("TRANSIT_GRAPH_PATH", "/data/graph.json"),
            ("TRANSIT_FARES_PATH", "/data/fares.json"),
            ("TRANSIT_BIND_ADDR", "0.0.0.0:8080"),
            ("TRANSIT_REQUEST_TIMEOUT_SECS", "3"),
            ("TRANSIT_NEAREST_K", "8"),
        ])
        .unwrap();

        assert_eq!(config.fares_path, Some(PathBuf::from("/data/fares.json")));
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.planner.timeout, Duration::from_secs(3));
        assert_eq!(config.planner.nearest_k, 8);
    }

    #[test]
    fn graph_path_required() {
        let err = config(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TRANSIT_GRAPH_PATH")));

        let err = config(&[("TRANSIT_GRAPH_PATH", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn bad_values_rejected() {
        let err = config(&[
            ("TRANSIT_GRAPH_PATH", "g.json"),
            ("TRANSIT_BIND_ADDR", "localhost"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "TRANSIT_BIND_ADDR", .. }));

        let err = config(&[
            ("TRANSIT_GRAPH_PATH", "g.json"),
            ("TRANSIT_NEAREST_K", "0"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "TRANSIT_NEAREST_K", .. }));

        let err = config(&[
            ("TRANSIT_GRAPH_PATH", "g.json"),
            ("TRANSIT_REQUEST_TIMEOUT_SECS", "soon"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("TRANSIT_REQUEST_TIMEOUT_SECS"));
    }
}
