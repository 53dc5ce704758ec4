use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SERVICE_NAME: &str = "Brand Risk Validator";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. The keyword table is
/// not part of the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address the HTTP server binds to (BRANDGUARD_BIND)
    pub bind: String,
    /// Listening port (PORT, as set by the hosting platform)
    pub port: u16,
    /// Name reported by /api/health (BRANDGUARD_SERVICE_NAME)
    pub service_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number between 0 and 65535, got {raw:?}"))?,
            _ => DEFAULT_PORT,
        };

        let service_name = lookup("BRANDGUARD_SERVICE_NAME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        Ok(Self {
            bind: lookup("BRANDGUARD_BIND")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port,
            service_name,
        })
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(mut self, bind: Option<String>, port: Option<u16>) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
