//! Service configuration
//!
//! Read from environment variables at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DATA_DIR_VAR: &str = "FREEZER_DOOR_DATA_DIR";
pub const BIND_VAR: &str = "FREEZER_DOOR_BIND";
pub const STATIC_DIR_VAR: &str = "FREEZER_DOOR_STATIC_DIR";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var} points to {}, which is not a directory", .path.display())]
    NotADirectory { var: &'static str, path: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding recipes.json and spirits.json
    pub data_dir: PathBuf,
    pub bind: SocketAddr,
    /// Front-end assets served for paths outside the API
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let bind_value = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_value
            .parse()
            .map_err(|_| ConfigError::InvalidBind {
                var: BIND_VAR,
                value: bind_value.clone(),
            })?;

        let static_dir = match lookup(STATIC_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            Some(dir) => {
                let path = PathBuf::from(dir);
                if !path.is_dir() {
                    return Err(ConfigError::NotADirectory {
                        var: STATIC_DIR_VAR,
                        path,
                    });
                }
                Some(path)
            }
            None => None,
        };

        Ok(Self {
            data_dir,
            bind,
            static_dir,
        })
    }
}

/// `<project root>/data`, located relative to the running executable
pub fn default_data_dir() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert!(config.data_dir.ends_with("data"));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let static_dir = tempfile::tempdir().unwrap();
        let static_path = static_dir.path().display().to_string();
        let config = Config::from_lookup(lookup_from(&[
            (DATA_DIR_VAR, "/srv/freezer-door/data"),
            (BIND_VAR, "0.0.0.0:8080"),
            (STATIC_DIR_VAR, static_path.as_str()),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/freezer-door/data"));
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.static_dir.as_deref(), Some(static_dir.path()));
    }

    #[test]
    fn test_invalid_bind() {
        let err = Config::from_lookup(lookup_from(&[(BIND_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { .. }));
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn test_missing_static_dir() {
        let err = Config::from_lookup(lookup_from(&[(STATIC_DIR_VAR, "/nonexistent/assets")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory { .. }));
    }

    #[test]
    fn test_blank_static_dir_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[(STATIC_DIR_VAR, "  ")])).unwrap();
        assert!(config.static_dir.is_none());
    }
}
