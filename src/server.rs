pub mod capture;
pub mod data_url;
pub mod error;
pub mod health;
pub mod index;
pub mod page;
pub mod state;
pub mod upload;
#[cfg(test)]
mod test;

use crate::config::Config;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn router(config: &Config, state: AppState) -> Router {
    Router::new()
        .route("/", get(index::show).post(index::upload))
        .route("/capture", post(capture::capture))
        .route("/health", get(health::health))
        .nest_service("/uploads", ServeDir::new(&state.upload_dir))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: &Config, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    let _ = state
        .logger
        .info(&format!("Listening on http://{}", listener.local_addr()?));

    axum::serve(listener, router(config, state)).await
}
