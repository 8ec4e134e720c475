//! API server binary.

use gridiron_api::{app_router, fixtures, store, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gridiron_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let pool = store::connect(&config.database_url).await?;
    store::ensure_tables(&pool).await?;
    if config.seed_demo {
        fixtures::seed_demo_data(&pool).await?;
    }

    let app = app_router(AppState { pool });
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
