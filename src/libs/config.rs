//! Configuration management for the taskboard client.
//!
//! Settings live in a JSON file inside the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\taskboard\client\config.json`
//! - **macOS**: `~/Library/Application Support/taskboard/client/config.json`
//! - **Linux**: `~/.local/share/taskboard/client/config.json`
//!
//! The API origin is resolved in this order: the `TASKBOARD_API_URL`
//! environment variable (a `.env` file is honored), the `server` section of
//! the file, then the built-in default `http://localhost:8000/api`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskboard::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Talking to {}", config.server().api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::taskboard::APP_METADATA_DEFAULT_API_URL;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured API origin.
pub const API_URL_ENV: &str = "TASKBOARD_API_URL";

/// Connection settings for the Task Board API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL every endpoint is resolved against, e.g. `http://localhost:8000/api`.
    pub api_url: String,

    /// Per-request timeout in seconds. Requests wait indefinitely when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            api_url: APP_METADATA_DEFAULT_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Loads the configuration file, or the default configuration if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any previous file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Effective server settings, with the environment override applied.
    pub fn server(&self) -> ServerConfig {
        Self::resolve_server(self.server.clone(), env::var(API_URL_ENV).ok())
    }

    /// Merges file settings with an optional URL override; blank overrides are ignored.
    pub fn resolve_server(server: Option<ServerConfig>, url_override: Option<String>) -> ServerConfig {
        let mut server = server.unwrap_or_default();
        if let Some(url) = url_override.map(|url| url.trim().to_string()).filter(|url| !url.is_empty()) {
            server.api_url = url;
        }
        server
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.server.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleServer);
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(default.api_url)
            .interact_text()?;

        let timeout: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimeout.to_string())
            .default(default.timeout_secs.map(|t| t.to_string()).unwrap_or_default())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                match parse_timeout(input) {
                    Ok(_) => Ok(()),
                    Err(_) => Err(Message::InvalidTimeout(input.clone()).to_string()),
                }
            })
            .interact_text()?;

        config.server = Some(ServerConfig {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            timeout_secs: parse_timeout(&timeout)?,
        });

        Ok(config)
    }
}

/// Parses the wizard's timeout field; blank means no timeout.
pub fn parse_timeout(input: &str) -> Result<Option<u64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    Ok(Some(input.parse::<u64>()?))
}
