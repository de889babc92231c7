//! HTTP API server.
//!
//! Serves the todo REST routes and mounts the MCP service under `/mcp` on
//! the same listener. The database is constructed by the caller, handed to
//! [`run`], and closed here once the server has shut down.

mod error;
mod handlers;
pub mod routes;
mod state;

#[cfg(test)]
mod error_test;

use std::env;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::mcp::create_mcp_service;

pub use error::{ApiError, ApiJson, ApiPath, ErrorResponse};
pub use handlers::WELCOME_MESSAGE;
pub use state::AppState;

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "TODOS_HOST";
/// Environment variable overriding the port.
pub const PORT_ENV: &str = "TODOS_PORT";
/// Environment variable overriding the database file.
pub const DB_ENV: &str = "TODOS_DB";

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// SQLite database file
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            db_path: PathBuf::from("todos.db"),
        }
    }
}

impl Config {
    /// Build a config from defaults overridden by `TODOS_*` environment variables.
    ///
    /// Values that fail to parse are ignored in favour of the default.
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var(HOST_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.host),
            port: env::var(PORT_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            db_path: env::var(DB_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Errors that stop the server.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(code(todos::api::bind), help("Is another process using this port?"))]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(todos::api::serve))]
    Serve(#[from] io::Error),
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server until Ctrl-C, then close the database.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ServerError> {
    let db = Arc::new(db);
    let ct = CancellationToken::new();

    let mcp_service = create_mcp_service::<D>(Arc::clone(&db), ct.child_token());
    let app = routes::create_router(AppState::<D>::new(Arc::clone(&db)))
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);
    info!("API docs at http://{}/docs, MCP endpoint at http://{}/mcp", addr, addr);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct.clone()))
        .await;

    ct.cancel();
    db.close().await;
    info!("API server stopped");

    result.map_err(ServerError::from)
}

async fn shutdown_signal(ct: CancellationToken) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
        _ = ct.cancelled() => {}
    }
    ct.cancel();
}
