use convoy_core::{init_observability, Config, RecordStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod api;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize observability FIRST
    init_observability()?;

    info!("convoy daemon starting");

    let config = Config::load()?;

    info!(storage_dir = %config.storage_dir, "initializing record store");
    let store = Arc::new(RecordStore::new(&config.storage_dir).await?);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .map_err(|e| format!("invalid listen address {}: {}", config.listen_addr, e))?;

    info!(%addr, "convoy daemon ready");
    api::serve(addr, store).await?;

    info!("convoy daemon shutting down");
    Ok(())
}
