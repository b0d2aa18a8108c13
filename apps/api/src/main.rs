mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::service::ChatService;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::resume::fetcher::ResumeFetcher;
use crate::resume::prompts::fallback_system_prompt;
use crate::resume::render::{build_system_prompt, PromptOptions};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-chat v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Gemini client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    );
    info!("Gemini client initialized (model: {})", llm.model());

    // Placeholder prompt until the résumé is loaded; startup never fails on content.
    let chat = Arc::new(ChatService::new(
        Arc::new(llm),
        fallback_system_prompt(&config.resume_owner),
    ));

    let fetcher = ResumeFetcher::new(config.resume_content_url());
    match resume::load_resume(&fetcher, config.resume_cache_dir.as_deref()).await {
        Ok(bundle) => {
            let options = PromptOptions {
                owner: &config.resume_owner,
                visa_status: config.resume_visa_status.as_deref(),
            };
            let prompt = build_system_prompt(&bundle, &options);
            info!("System prompt built ({} bytes)", prompt.len());
            chat.set_system_prompt(prompt).await;
        }
        Err(e) => warn!("Failed to load résumé data, using placeholder system prompt: {e}"),
    }

    let state = AppState {
        chat,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
