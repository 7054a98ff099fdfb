//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   POST   /jobs          (admin)
//!   GET    /jobs          ?title=&minSalary=&hasEquity=
//!   GET    /jobs/{id}
//!   PATCH  /jobs/{id}     (admin)
//!   DELETE /jobs/{id}     (admin)
//!   GET    /health

pub mod auth;
pub mod error;
pub mod handlers;
pub mod state;
pub mod validate;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::jobs::router())
        .merge(handlers::health::router())
        .with_state(state)
}

/// Bind to `bind` and serve until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> std::io::Result<()> {
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
