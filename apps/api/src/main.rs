mod assessment;
mod completion;
mod config;
mod errors;
mod lessons;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::completion::{CompletionClient, OpenAiClient};
use crate::config::Config;
use crate::lessons::{HttpLessonsClient, LessonsCatalog};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Nivel API v{}", env!("CARGO_PKG_VERSION"));

    // One connection pool shared by both outbound clients
    let http = reqwest::Client::new();

    let lessons: Arc<dyn LessonsCatalog> = Arc::new(HttpLessonsClient::new(
        http.clone(),
        config.lessons_base_url.clone(),
    ));
    info!("Lessons client initialized ({})", config.lessons_base_url);

    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; completion calls will fail until it is provided");
    }
    let completion_client: Arc<dyn CompletionClient> =
        Arc::new(OpenAiClient::new(http, config.openai_api_key.clone()));
    info!("Completion client initialized (model: {})", completion::MODEL);

    let state = AppState {
        lessons,
        completion: completion_client,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
