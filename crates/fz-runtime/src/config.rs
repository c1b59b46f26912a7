use crate::{Error, Result};
use fz_engine::DEFAULT_SHUTDOWN_MARKER;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default pause after go-fuzz announces shutdown, giving it time to flush
/// its last status lines
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(60);

/// Resolve the config file path based on priority:
/// 1. Explicit path
/// 2. FZ_CONFIG environment variable
/// 3. XDG config directory (`$XDG_CONFIG_HOME/fz/config.toml`)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os("FZ_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("fz").join("config.toml"))
}

/// User configuration, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub color: bool,
    pub summary_on_eof: bool,
    pub shutdown_grace_secs: u64,
    pub shutdown_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            summary_on_eof: false,
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE.as_secs(),
            shutdown_marker: DEFAULT_SHUTDOWN_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        if config.shutdown_marker.is_empty() {
            return Err(Error::Config(format!(
                "{}: shutdown_marker must not be empty",
                path.display()
            )));
        }

        Ok(config)
    }

    pub fn controller(&self) -> ControllerConfig {
        ControllerConfig {
            shutdown_marker: self.shutdown_marker.clone(),
            shutdown_grace: Duration::from_secs(self.shutdown_grace_secs),
            summary_on_eof: self.summary_on_eof,
        }
    }
}

/// Settings consumed by the stream controller and the line reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub shutdown_marker: String,
    pub shutdown_grace: Duration,
    pub summary_on_eof: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Config::default().controller()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.controller().shutdown_grace, DEFAULT_SHUTDOWN_GRACE);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "summary_on_eof = true\nshutdown_grace_secs = 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.summary_on_eof);
        assert!(config.color);
        assert_eq!(config.shutdown_marker, DEFAULT_SHUTDOWN_MARKER);
        assert_eq!(config.controller().shutdown_grace, Duration::from_secs(5));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "colour = false\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_marker_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "shutdown_marker = \"\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("shutdown_marker"));
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/fz.toml")));
        assert_eq!(path, Some(PathBuf::from("/tmp/fz.toml")));
    }
}
