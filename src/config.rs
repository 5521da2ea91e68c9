use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    // Transcript language requested from the provider (BCP-47 code).
    pub language: String,
}

#[derive(Debug, Deserialize)]
struct AppConfigFile {
    listen_addr: Option<String>,
    language: Option<String>,
}

const DEFAULT_PORT: u16 = 10000;

fn default_listen_addr() -> String {
    // PORT comes from the hosting environment (e.g. a PaaS); the config file
    // wins only when it sets listen_addr explicitly.
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    format!("0.0.0.0:{}", port)
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // The service runs fine with no config file at all; only a file that
        // exists but fails to parse is an error.
        let file: AppConfigFile = if path.exists() {
            let raw = fs::read_to_string(path).with_context(|| {
                format!(
                    "Failed to read config file: {}",
                    path.to_string_lossy().as_ref()
                )
            })?;
            toml::from_str(&raw).context("Failed to parse config.toml")?
        } else {
            AppConfigFile {
                listen_addr: None,
                language: None,
            }
        };

        Ok(Self {
            listen_addr: file.listen_addr.unwrap_or_else(default_listen_addr),
            language: file.language.unwrap_or_else(|| "hi".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_uses_defaults() {
        let cfg = AppConfig::load("does-not-exist.toml").unwrap();
        assert_eq!(cfg.language, "hi");
        assert!(cfg.listen_addr.starts_with("0.0.0.0:"));
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let path = std::env::temp_dir().join("yt-transcript-web-bad-config.toml");
        std::fs::write(&path, "listen_addr = [not toml").unwrap();
        assert!(AppConfig::load(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
