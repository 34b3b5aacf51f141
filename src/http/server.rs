//! Listener configuration and the serve loop

use super::handlers::SharedSlot;
use super::router::router;
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

/// Configuration of the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Number of runtime worker threads
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            workers: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with custom values
    ///
    /// A worker count of zero falls back to the default.
    pub fn new(host: IpAddr, port: u16, workers: usize) -> Self {
        let workers = if workers == 0 {
            let default = Self::default().workers;
            tracing::warn!(
                "Invalid worker count ({}), using default ({})",
                workers,
                default
            );
            default
        } else {
            workers
        };

        Self {
            host,
            port,
            workers,
        }
    }

    /// Socket address to bind
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the multi-threaded runtime the server runs on
    pub fn build_runtime(&self) -> std::io::Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.workers)
            .enable_all()
            .build()
    }
}

/// Serve the account API on `listener` until `shutdown` resolves
///
/// In-flight requests are allowed to finish once shutdown starts.
pub async fn serve<F>(listener: TcpListener, slot: SharedSlot, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(slot).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
}
