mod backend;
mod config;
mod error;
mod handlers;
mod loaders;

use anyhow::{Context, Result};
use backend::BackendClient;
use config::Config;
use loaders::{CourseListLoader, ScheduleLoader};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    pub course_loader: CourseListLoader,
    pub schedule_loader: ScheduleLoader,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            course_loader: CourseListLoader::new(backend.clone()),
            schedule_loader: ScheduleLoader::new(backend),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shifter=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("Using Shifter API at {}", config.api_url);

    let state = Arc::new(AppState::new(BackendClient::new(config.api_url.clone())));

    let app = handlers::router(state).layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
