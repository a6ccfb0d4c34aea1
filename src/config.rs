use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log level configured in concierge.yaml (RUST_LOG overrides it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Main concierge configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub chat: ChatConfig,
}

/// Timing of the simulated typing in chat surfaces. Defaults mirror the
/// original web demo: 600 ms delay, 60 reveal steps at 30 ms.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Simulated "thinking" delay before a reply starts
    pub response_delay_ms: u64,
    /// Number of chunks a reply is revealed in
    pub reveal_steps: usize,
    /// Pause between chunks
    pub reveal_interval_ms: u64,
    /// Disable to print replies at once (also off when piping or --quiet)
    pub animate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            chat: ChatConfig::default(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 600,
            reveal_steps: 60,
            reveal_interval_ms: 30,
            animate: true,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Check CONCIERGE_CONFIG env var
        if let Ok(env_path) = std::env::var("CONCIERGE_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from CONCIERGE_CONFIG: {}", e);
                    }
                }
            }
        }

        // Try ~/.config/concierge/concierge.yaml
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("concierge").join("concierge.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Try ./concierge.yaml (for development)
        let local_config = PathBuf::from("concierge.yaml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_timing() {
        let config = Config::default();
        assert_eq!(config.chat.response_delay_ms, 600);
        assert_eq!(config.chat.reveal_steps, 60);
        assert_eq!(config.chat.reveal_interval_ms, 30);
        assert!(config.chat.animate);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_yaml::from_str("log_level: debug\n").expect("parses");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.chat.response_delay_ms, 600);
    }

    #[test]
    fn test_chat_section_overrides() {
        let yaml = "chat:\n  animate: false\n  response_delay_ms: 0\n";
        let config: Config = serde_yaml::from_str(yaml).expect("parses");
        assert!(!config.chat.animate);
        assert_eq!(config.chat.response_delay_ms, 0);
        assert_eq!(config.chat.reveal_steps, 60);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let yaml_str = serde_yaml::to_string(&config).expect("Failed to serialize");
        let parsed: Config = serde_yaml::from_str(&yaml_str).expect("Failed to deserialize");
        assert_eq!(parsed.chat.reveal_steps, config.chat.reveal_steps);
        assert_eq!(parsed.log_level, config.log_level);
    }

    #[test]
    fn test_load_returns_config() {
        let result = Config::load(None);
        assert!(result.is_ok());
    }
}
