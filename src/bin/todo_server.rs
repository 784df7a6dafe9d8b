//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! TODO_PORT=7540 TODO_DBFILE=scheduler.db todo_server
//! ```
//!
//! Log output is controlled by `RUST_LOG` and defaults to `info`.

use log::{error, info};
use mockable::DefaultClock;
use std::sync::Arc;
use todo_scheduler::{
    api,
    config::ServerConfig,
    task::{
        adapters::sqlite::{SqliteTaskRepository, open_pool},
        services::TaskLifecycleService,
    },
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const POOL_SIZE: u32 = 4;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let pool = open_pool(&config.db_file().to_string_lossy(), POOL_SIZE)?;
    let service = TaskLifecycleService::new(
        Arc::new(SqliteTaskRepository::new(pool)),
        Arc::new(DefaultClock),
    );

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("event=server_start status=ok addr={addr}");

    axum::serve(listener, api::router(Arc::new(service)))
        .await
        .inspect_err(|err| error!("event=server_stop status=error error={err}"))?;
    Ok(())
}
