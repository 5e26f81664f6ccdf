//! Runtime configuration
//!
//! Environment variables:
//! - `DATABASE_URL`: MongoDB connection string (optional; storage reports
//!   unavailable when unset)
//! - `DATABASE_NAME`: database to select (optional, default "app")
//! - `HOST`: bind address (default "0.0.0.0")
//! - `PORT`: HTTP port (default 8000)
//! - `CORS_ORIGINS`: comma-separated allowed origins (empty = permissive)
//!
//! CLI flags override the environment.

use std::env;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

const DEFAULT_DATABASE_NAME: &str = "app";

/// CLI arguments
#[derive(Parser, Debug, Default)]
#[command(name = "cleaning-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// MongoDB connection string (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Database name (overrides DATABASE_NAME)
    #[arg(long)]
    pub database_name: Option<String>,
}

/// Which storage settings were configured, reported by the diagnostic
/// endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPresence {
    pub database_url_set: bool,
    pub database_name_set: bool,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// MongoDB connection string; storage is unavailable without one
    #[serde(default)]
    pub database_url: Option<String>,

    /// Database to select (default: "app")
    #[serde(default)]
    pub database_name: Option<String>,

    /// CORS allowed origins (empty = permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            database_name: None,
            cors_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_port);
        let cors_origins = env::var("CORS_ORIGINS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port,
            database_url: env::var("DATABASE_URL").ok(),
            database_name: env::var("DATABASE_NAME").ok(),
            cors_origins,
        }
    }

    /// Apply CLI overrides on top of environment configuration.
    pub fn merge_cli(mut self, cli: Cli) -> Self {
        if let Some(host) = cli.host {
            self.host = host;
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(url) = cli.database_url {
            self.database_url = Some(url);
        }
        if let Some(name) = cli.database_name {
            self.database_name = Some(name);
        }
        self
    }

    /// Database name with the default applied.
    pub fn database_name(&self) -> &str {
        self.database_name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }

    /// HTTP server settings derived from this configuration.
    pub fn http(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }

    /// Storage configuration presence, for the diagnostic endpoint.
    pub fn env_presence(&self) -> EnvPresence {
        EnvPresence {
            database_url_set: self.database_url.is_some(),
            database_name_set: self.database_name.is_some(),
        }
    }
}
