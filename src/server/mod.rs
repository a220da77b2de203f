pub mod app;
pub mod handlers;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::movies::YtsClient;
use crate::store::Store;

pub async fn start_server(port: u16, movie_api: &str, cors_origin: Option<&str>) -> Result<()> {
    let store = Arc::new(Store::seeded());
    let movies = Arc::new(YtsClient::new(movie_api)?);

    let app = app::create_app(store, movies, cors_origin)?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health     - Health check");
    info!("  /graphql    - GraphQL API (POST) & Playground (GET)");
}
