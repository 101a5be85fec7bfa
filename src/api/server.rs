//! Study API server lifecycle — starts/stops the axum HTTP server the host
//! UI talks to.
//!
//! Pattern: bind → spawn background task → return handle with shutdown
//! channel.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::api::router::study_api_router;
use crate::core_state::CoreState;

/// Handle to a running study API server.
pub struct StudyApiServer {
    /// The bound address (useful when binding port 0).
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl StudyApiServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Study API server shutdown signal sent");
        }
    }
}

/// Start the study API server on `addr`.
///
/// Builds the router, binds, and spawns the axum server in a background
/// tokio task. Returns a handle with the bound address and a shutdown
/// channel.
pub async fn start_study_api_server(
    core: Arc<CoreState>,
    addr: SocketAddr,
) -> Result<StudyApiServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind study API server on {addr}: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Cannot read local address: {e}"))?;

    let app = study_api_router(core);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let serve = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(e) = serve.await {
            tracing::error!(error = %e, "Study API server error");
        }
    });

    tracing::info!(%addr, "Study API server listening");

    Ok(StudyApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}
