//! CLI argument definitions for the concierge binary.
//!
//! Uses `clap` with derive macros. Priority resolution:
//! CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Concierge — a chat bot answering room-availability queries.
#[derive(Parser, Debug)]
#[command(name = "concierge", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Health endpoint port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Inventory endpoint URL.
    #[arg(long = "inventory-url")]
    pub inventory_url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CONCIERGE_CONFIG env var > ~/.concierge/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CONCIERGE_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the health endpoint port.
    ///
    /// Priority: --port flag > CONCIERGE_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("CONCIERGE_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the inventory endpoint URL.
    ///
    /// Priority: --inventory-url flag > CONCIERGE_INVENTORY_URL env var >
    /// config file value.
    pub fn resolve_inventory_url(&self, config_url: &str) -> String {
        if let Some(ref url) = self.inventory_url {
            return url.clone();
        }
        if let Ok(url) = std::env::var("CONCIERGE_INVENTORY_URL") {
            return url;
        }
        config_url.to_string()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > RUST_LOG (handled by EnvFilter) >
    /// config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        if let Some(ref level) = self.log_level {
            return level.clone();
        }
        config_level.to_string()
    }
}

/// Platform default config path: `~/.concierge/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".concierge").join("config.toml");
    }
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".concierge").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            port: None,
            inventory_url: None,
            log_level: None,
        }
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let mut a = args();
        a.config = Some(PathBuf::from("/etc/concierge.toml"));
        assert_eq!(a.resolve_config_path(), PathBuf::from("/etc/concierge.toml"));
    }

    #[test]
    fn test_port_flag_wins_over_config() {
        let mut a = args();
        a.port = Some(9999);
        assert_eq!(a.resolve_port(3001), 9999);
    }

    #[test]
    fn test_port_falls_back_to_config() {
        assert_eq!(args().resolve_port(3001), 3001);
    }

    #[test]
    fn test_inventory_url_flag_wins() {
        let mut a = args();
        a.inventory_url = Some("http://flag.test/inv".to_string());
        assert_eq!(
            a.resolve_inventory_url("http://config.test/inv"),
            "http://flag.test/inv"
        );
    }

    #[test]
    fn test_inventory_url_falls_back_to_config() {
        assert_eq!(
            args().resolve_inventory_url("http://config.test/inv"),
            "http://config.test/inv"
        );
    }

    #[test]
    fn test_log_level_flag_wins() {
        let mut a = args();
        a.log_level = Some("debug".to_string());
        assert_eq!(a.resolve_log_level("info"), "debug");
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        assert_eq!(args().resolve_log_level("warn"), "warn");
    }
}
