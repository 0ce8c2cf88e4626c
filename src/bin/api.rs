//! Mentorship API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use mentorship::api::{self, Config, ServerError};
use mentorship::db::{Database, SqliteDatabase};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "mentorship-api")]
#[command(author, version, about = "Mentorship API server", long_about = None)]
struct Cli {
    /// Host address to bind to (env: MENTORSHIP_HOST, default 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (env: PORT, default 3000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path (env: MENTORSHIP_DB, default ~/.local/share/mentorship/mentorship.db)
    #[arg(long, conflicts_with = "in_memory")]
    db: Option<PathBuf>,

    /// Keep all data in memory; nothing survives a restart
    #[arg(long)]
    in_memory: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new().with_in_memory(self.in_memory);
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(db) = self.db {
            config = config.with_db_path(db);
        }
        config
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let config = Cli::parse().into_config();
    api::init_tracing();

    let db = open_database(&config).await?;

    // Run migrations before starting the server
    db.migrate().await.map_err(ServerError::from)?;
    info!("Database migrations complete");

    let shutdown = CancellationToken::new();
    tokio::spawn(api::shutdown_signal(shutdown.clone()));

    let db = Arc::new(db);
    let result = api::run::<SqliteDatabase>(config, Arc::clone(&db), shutdown).await;
    db.close().await;

    result?;
    Ok(())
}

async fn open_database(config: &Config) -> Result<SqliteDatabase, ServerError> {
    if config.in_memory {
        info!("Using in-memory database");
        return Ok(SqliteDatabase::in_memory().await?);
    }

    info!("Opening database at {:?}", config.db_path);

    // Ensure parent directory exists
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(SqliteDatabase::open(&config.db_path).await?)
}
