//! HTTP front-end
//!
//! Exposes the deliberation as a JSON API:
//!
//! - `GET /`, `/api`, `/api/`: health acknowledgment
//! - `POST /`, `/debate`, `/api/debate`: `{"question": "..."}` → report or error record

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState};
pub use routes::router;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// Serve `router` on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
}
