use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::static_files::StaticFiles;

/// Accept loop: one spawned task per connection, bounded by a semaphore
/// sized from `server.max_connections`.
///
/// The acceptor itself never blocks on request handling; when all slots
/// are taken it simply stops accepting until one frees up.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    let responder = StaticFiles::new(cfg.static_files.clone());
    let slots = Arc::new(Semaphore::new(cfg.server.max_connections));
    let max_request_bytes = cfg.limits.max_request_bytes;

    loop {
        let permit = slots.clone().acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let responder = responder.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, responder, max_request_bytes);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
            drop(permit);
        });
    }
}
