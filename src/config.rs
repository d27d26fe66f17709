use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{NotesError, Result};
use crate::storage::DEFAULT_DATA_FILE;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Settings for the HTTP server.
///
/// Built by the CLI from flags, which fall back to `NOTES_DATA_FILE`,
/// `NOTES_HOST` and `NOTES_PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// JSON file holding the note collection
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn new(data_file: impl Into<PathBuf>, host: impl Into<String>, port: u16) -> Self {
        Self {
            data_file: data_file.into(),
            host: host.into(),
            port,
        }
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                NotesError::Server(format!(
                    "invalid bind address '{}:{}': {}",
                    self.host, self.port, e
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.data_file, PathBuf::from("notes_data.json"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::new("n.json", "127.0.0.1", 3000);
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_bind_addr_rejects_hostname() {
        let config = ServerConfig::new("n.json", "not a host", 3000);
        assert!(matches!(config.bind_addr(), Err(NotesError::Server(_))));
    }
}
