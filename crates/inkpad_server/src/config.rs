//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_DIR: &str = "./pages";

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Directory holding the page files.
    pub data_dir: PathBuf,
    /// Optional absolute directory for rolling log files; logging stays
    /// disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("valid default bind addr"),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from `INKPAD_BIND_ADDR`, `INKPAD_DATA_DIR`
    /// and `INKPAD_LOG_DIR`, falling back to defaults.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("INKPAD_BIND_ADDR") {
            config.bind_addr = addr
                .parse()
                .map_err(|err| format!("invalid INKPAD_BIND_ADDR `{addr}`: {err}"))?;
        }
        if let Ok(dir) = std::env::var("INKPAD_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("INKPAD_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn default_config_is_local_and_logless() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(config.bind_addr.ip().is_loopback());
        assert!(config.log_dir.is_none());
    }
}
