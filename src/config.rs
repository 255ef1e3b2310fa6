// config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;

pub const ADDR_VAR: &str = "MOT_REPORT_ADDR";
pub const WORKERS_VAR: &str = "MOT_REPORT_WORKERS";
pub const MAX_BODY_VAR: &str = "MOT_REPORT_MAX_BODY";

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Passed straight to astra's `max_workers`.
    pub max_workers: usize,
    /// Request bodies above this are rejected with 413.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    /// Reads the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self, ServerError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(raw) = lookup(ADDR_VAR) {
            cfg.addr = raw
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("{ADDR_VAR}={raw}: {e}")))?;
        }

        if let Some(raw) = lookup(WORKERS_VAR) {
            cfg.max_workers = parse_positive(WORKERS_VAR, &raw)?;
        }

        if let Some(raw) = lookup(MAX_BODY_VAR) {
            cfg.max_body_bytes = parse_positive(MAX_BODY_VAR, &raw)?;
        }

        Ok(cfg)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize, ServerError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ServerError::Config(format!("{key} must be greater than zero"))),
        Ok(n) => Ok(n),
        Err(e) => Err(ServerError::Config(format!("{key}={raw}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_keep_defaults() {
        let cfg = Config::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = Config::from_lookup(lookup_from(&[
            (ADDR_VAR, "0.0.0.0:8084"),
            (WORKERS_VAR, "2"),
            (MAX_BODY_VAR, "4096"),
        ]))
        .unwrap();

        assert_eq!(cfg.addr.port(), 8084);
        assert_eq!(cfg.max_workers, 2);
        assert_eq!(cfg.max_body_bytes, 4096);
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = Config::from_lookup(lookup_from(&[(WORKERS_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[(ADDR_VAR, "not an addr")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
