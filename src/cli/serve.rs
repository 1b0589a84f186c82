use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Result, TrackerError};
use crate::server::run_server;
use crate::settings::{shellexpand_path, Settings};

pub async fn run(settings: &Settings, listen: Option<String>, db: Option<String>) -> Result<()> {
    let addr = parse_listen_addr(listen.as_deref().unwrap_or(&settings.listen_addr))?;
    let db_path = db
        .map(|p| PathBuf::from(shellexpand_path(&p)))
        .unwrap_or_else(|| settings.db_path());
    run_server(&db_path, addr).await
}

fn parse_listen_addr(raw: &str) -> Result<SocketAddr> {
    raw.parse()
        .map_err(|_| TrackerError::Settings(format!("invalid listen address: {raw}")))
}
