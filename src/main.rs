use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::RwLock;

use chatgenius::application::services::ChatResponder;
use chatgenius::domain::Session;
use chatgenius::infrastructure::llm::DeepseekClient;
use chatgenius::infrastructure::observability::{init_tracing, TracingConfig};
use chatgenius::infrastructure::pdf::LopdfExtractor;
use chatgenius::infrastructure::scrape::HtmlScrapeAdapter;
use chatgenius::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    let pdf_extractor = Arc::new(LopdfExtractor::new());
    let web_scraper = Arc::new(HtmlScrapeAdapter::new());
    let chat_client = Arc::new(DeepseekClient::new(
        settings.llm.base_url.clone(),
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
    ));
    let responder = Arc::new(ChatResponder::new(
        chat_client,
        settings.chat.enable_ai_mode,
    ));
    let session = Arc::new(RwLock::new(Session::new(
        settings.chat.default_mode,
        settings.chat.history_limit,
    )));

    tracing::info!(
        ai_enabled = settings.chat.enable_ai_mode,
        default_mode = %settings.chat.default_mode,
        history_limit = settings.chat.history_limit,
        "ChatGenius document assistant starting"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        pdf_extractor,
        web_scraper,
        responder,
        session,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
