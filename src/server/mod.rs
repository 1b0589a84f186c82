//! HTTP record service over the `expenses` table.

mod handlers;
mod middleware;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::middleware::from_fn;
use axum::routing::{delete, get};
use axum::Router;
use rusqlite::Connection;
use tokio::net::TcpListener;
use tracing::info;

use crate::db::{get_connection, init_db};
use crate::error::{Result, TrackerError};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs one statement against the shared connection on the blocking pool.
    pub async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let conn = db
                .lock()
                .map_err(|_| TrackerError::Other("database lock poisoned".to_string()))?;
            f(&conn)
        })
        .await
        .map_err(|e| TrackerError::Other(e.to_string()))?
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "Backend is running" }))
        .route(
            "/expenses",
            get(handlers::list_expenses)
                .post(handlers::create_expense)
                .delete(handlers::delete_without_id),
        )
        .route("/expenses/:id", delete(handlers::delete_expense))
        .layer(from_fn(middleware::cors_middleware))
        .layer(from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}

/// Opens (and if needed creates) the database, then serves until the process exits.
pub async fn run_server(db_path: &Path, addr: SocketAddr) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = get_connection(db_path)?;
    init_db(&conn)?;
    info!(db = %db_path.display(), "connected to expenses database");

    let app = build_router(AppState::new(conn));
    let listener = TcpListener::bind(addr).await?;
    info!("server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
