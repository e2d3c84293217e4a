//! Plain-text HTTP surface
//!
//! There are no routes: every method on every path lands in the fallback
//! handler, which takes a fresh snapshot and always answers 200.

use crate::sensors::{iio::IioReader, snapshot::Snapshot};
use axum::{
    extract::State,
    http::{Method, Uri},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn create_http_server(reader: IioReader) -> Router {
    Router::new()
        .fallback(serve_snapshot)
        .with_state(Arc::new(reader))
}

async fn serve_snapshot(
    State(reader): State<Arc<IioReader>>,
    method: Method,
    uri: Uri,
) -> String {
    tracing::debug!("Incoming request: {} {}", method, uri);

    // sysfs reads block; keep them off the async workers
    let snapshot = match tokio::task::spawn_blocking(move || Snapshot::take(&reader)).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Sensor read task failed: {}", e);
            Snapshot::default()
        }
    };

    snapshot.to_string()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

/// Bind `listen` and serve until Ctrl-C
pub async fn run(listen: SocketAddr, reader: IioReader) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen).await?;
    tracing::info!(
        "Serving {} on http://{}",
        reader.root().display(),
        listener.local_addr()?
    );

    axum::serve(listener, create_http_server(reader))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
