use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use ollama_relay::infrastructure::llm::OllamaClient;
use ollama_relay::infrastructure::observability::{TracingConfig, init_tracing};
use ollama_relay::infrastructure::text_processing::PdfAdapter;
use ollama_relay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    let backend = Arc::new(OllamaClient::new(
        &settings.backend.base_url,
        settings.backend.generate_timeout(),
        settings.backend.tags_timeout(),
    ));

    tracing::info!(
        backend = %backend.base_url(),
        pdf_processing = settings.extraction.pdf.enabled,
        image_processing = settings.extraction.images.enabled,
        max_context_chars = settings.rag.max_context_chars,
        "Features available"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    let state = AppState::new(backend, Arc::new(PdfAdapter::new()), settings);
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
