use anyhow::{Context, Result};
use segitiga_types::Locale;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "segitiga.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000 }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub locale: Locale,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "segitiga=debug,info".to_string(), json: false }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SegitigaConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl SegitigaConfig {
    /// Loads `path`, or `segitiga.toml` when no path is given.
    ///
    /// An explicitly requested file must exist; a missing default file falls
    /// back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                info!(path = %path.display(), "Loaded configuration file");
                Self::from_toml_str(&contents)
                    .with_context(|| format!("invalid configuration in '{}'", path.display()))
            }
            Err(err) if explicit => Err(anyhow::Error::new(err)
                .context(format!("cannot read configuration file '{}'", path.display()))),
            Err(_) => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `SEGITIGA_*` environment overrides.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SEGITIGA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SEGITIGA_PORT") {
            self.server.port = port
                .parse::<u16>()
                .with_context(|| format!("SEGITIGA_PORT is not a port: '{port}'"))?;
        }
        if let Some(locale) = lookup("SEGITIGA_LOCALE") {
            self.ui.locale = locale.parse::<Locale>()?;
        }
        if let Some(filter) = lookup("SEGITIGA_LOG") {
            self.logging.filter = filter;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse::<SocketAddr>().with_context(|| format!("invalid listen address '{addr}'"))
    }
}
