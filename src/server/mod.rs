pub mod app;
pub mod handlers;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::app_context::AppContext;

pub async fn start_server(app: AppContext, port: u16, cors_origin: Option<&str>) -> Result<()> {
    let app = Arc::new(app);
    info!(
        "Store ready with {} authors and {} books",
        app.store().author_count(),
        app.store().book_count()
    );

    let router = app::create_app(app, cors_origin)?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (POST) & Playground (GET)");
}
