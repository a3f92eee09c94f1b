use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::{ChatClient, PdfExtractor, WebScraper};
use crate::application::services::ChatResponder;
use crate::domain::Session;
use crate::presentation::config::Settings;

/// Shared application state: the three port adapters, the responder, and the
/// single process-wide session behind a lock.
pub struct AppState<P, S, C>
where
    P: PdfExtractor,
    S: WebScraper,
    C: ChatClient,
{
    pub pdf_extractor: Arc<P>,
    pub web_scraper: Arc<S>,
    pub responder: Arc<ChatResponder<C>>,
    pub session: Arc<RwLock<Session>>,
    pub settings: Settings,
}

impl<P, S, C> Clone for AppState<P, S, C>
where
    P: PdfExtractor,
    S: WebScraper,
    C: ChatClient,
{
    fn clone(&self) -> Self {
        Self {
            pdf_extractor: Arc::clone(&self.pdf_extractor),
            web_scraper: Arc::clone(&self.web_scraper),
            responder: Arc::clone(&self.responder),
            session: Arc::clone(&self.session),
            settings: self.settings.clone(),
        }
    }
}
