mod error;
mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod mod_test;

use std::env;
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
use crate::paths::get_db_path;

pub use error::{ApiError, ErrorResponse};
pub use routes::{ApiDoc, create_router};
pub use state::AppState;

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// SQLite database file
    pub db_path: PathBuf,
    /// Use a throwaway in-memory store instead of `db_path`
    pub in_memory: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            db_path: get_db_path(),
            in_memory: false,
        }
    }
}

impl Config {
    /// Create config from environment variables with defaults.
    ///
    /// Reads `MENTORSHIP_HOST`, `PORT` and `MENTORSHIP_DB`. Unparseable
    /// values fall back to the default.
    pub fn new() -> Self {
        let defaults = Self::default();

        let host = env::var("MENTORSHIP_HOST")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or(defaults.host);
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let db_path = env::var("MENTORSHIP_DB")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        Self {
            host,
            port,
            db_path,
            in_memory: false,
        }
    }

    /// Address the listener binds to. IPv6 hosts are bracketed correctly.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Builder: set host (overrides env var)
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Builder: set port (overrides env var)
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Builder: set database path (overrides env var)
    pub fn with_db_path(mut self, path: PathBuf) -> Self {
        self.db_path = path;
        self
    }

    /// Builder: use an in-memory store
    pub fn with_in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }
}

/// Errors raised while starting or running the server.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Server I/O error: {0}")]
    #[diagnostic(
        code(mentorship::api::io),
        help("Is another process already listening on this address?")
    )]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    #[diagnostic(code(mentorship::api::database))]
    Database(#[from] crate::db::DbError),
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mentorship=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server until `shutdown` is cancelled.
///
/// The store must already be migrated. In-flight requests are drained
/// before this returns.
pub async fn run<D: Database + 'static>(
    config: Config,
    db: impl Into<Arc<D>>,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let state = AppState::new(db);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("API server stopped");
    Ok(())
}

/// Cancel `token` on Ctrl-C or SIGTERM.
pub async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
    token.cancel();
}
