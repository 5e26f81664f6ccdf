//! # HTTP Server
//!
//! Assembles the API and diagnostic routers around the shared gateway
//! and applies CORS.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::EnvPresence;
use crate::gateway::Gateway;
use crate::observability::Logger;

use super::api_routes::{api_routes, ApiState};
use super::config::HttpServerConfig;
use super::diagnostic_routes::{diagnostic_routes, DiagnosticState};

/// HTTP server for the cleaning services backend
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given gateway
    pub fn new(config: HttpServerConfig, gateway: Gateway, env: EnvPresence) -> Self {
        let router = Self::build_router(&config, gateway, env);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, gateway: Gateway, env: EnvPresence) -> Router {
        let api_state = Arc::new(ApiState::new(gateway.clone()));
        let diagnostic_state = Arc::new(DiagnosticState::new(gateway, env));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, as the original frontend
            // deployments expect
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(api_routes(api_state))
            .merge(diagnostic_routes(diagnostic_state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Logger::info("SERVER_STARTED", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
