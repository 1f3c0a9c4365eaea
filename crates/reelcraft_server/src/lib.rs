//! HTTP surface for the Reelcraft script pipeline.
//!
//! | Method | Path | Body |
//! |---|---|---|
//! | `POST` | `/api/generate` | `GenerationRequest` → `PipelineOutput` or `FailureBody` |
//! | `GET` | `/api/platforms` | list of `{ id, label }` |
//! | `GET` | `/health` | `{ "status": "ok" }` |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod errors;
mod routes;
mod state;

pub use errors::ApiError;
pub use routes::{PlatformInfo, create_router};
pub use state::AppState;

use tokio::net::TcpListener;
use tracing::{info, warn};

/// Serve the API on an already bound listener until Ctrl-C.
///
/// In-flight requests are allowed to finish before returning.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "Reelcraft API listening");
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Reelcraft API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
