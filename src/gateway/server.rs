//! HTTP server lifecycle for the gateway.

use std::net::SocketAddr;

use axum::Router;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::GatewayError;

/// Owns the listener task and its shutdown signal.
///
/// `start()` binds, spawns and returns the bound address, so binding to
/// port 0 reports the port the OS picked. `shutdown()` signals and waits.
pub struct DashboardServer {
    addr: SocketAddr,
    router: Option<Router>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl DashboardServer {
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self {
            addr,
            router: Some(router),
            shutdown_tx: None,
            handle: None,
        }
    }

    /// Bind the listener and spawn the server task.
    pub async fn start(&mut self) -> Result<SocketAddr, GatewayError> {
        let app = self.router.take().ok_or_else(|| GatewayError::StartupFailed {
            addr: self.addr,
            reason: "server already started".to_string(),
        })?;

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| GatewayError::StartupFailed {
                addr: self.addr,
                reason: e.to_string(),
            })?;

        let bound = listener
            .local_addr()
            .map_err(|e| GatewayError::StartupFailed {
                addr: self.addr,
                reason: e.to_string(),
            })?;

        tracing::info!("Dashboard listening on http://{}", bound);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                    tracing::info!("Dashboard shutting down");
                })
                .await
            {
                tracing::error!("Dashboard server error: {}", e);
            }
        });

        self.handle = Some(handle);
        Ok(bound)
    }

    /// Signal graceful shutdown and wait for the server task to finish.
    pub async fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}
