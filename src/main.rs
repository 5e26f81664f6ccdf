//! cleaning-api entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments
//! 2. Merges environment configuration
//! 3. Connects the persistence gateway
//! 4. Starts the HTTP server
//!
//! All logic lives in the library modules. A missing `DATABASE_URL` is not
//! fatal: the server runs with storage unavailable so the diagnostic
//! endpoint can report the misconfiguration.

use clap::Parser;

use cleaning_api::config::{AppConfig, Cli};
use cleaning_api::gateway::Gateway;
use cleaning_api::http_server::HttpServer;
use cleaning_api::observability::Logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_env().merge_cli(cli);

    let gateway = match Gateway::from_config(&config).await {
        Ok(gateway) => gateway,
        Err(e) => {
            Logger::error("STORAGE_CONNECT_FAILED", &[("error", &e.to_string())]);
            Gateway::unavailable()
        }
    };
    if !gateway.is_available() {
        Logger::warn(
            "STORAGE_UNAVAILABLE",
            &[("hint", "set DATABASE_URL to enable persistence")],
        );
    }

    let server = HttpServer::new(config.http(), gateway, config.env_presence());
    if let Err(e) = server.start().await {
        Logger::error("SERVER_FAILED", &[("error", &e.to_string())]);
        std::process::exit(1);
    }
}
