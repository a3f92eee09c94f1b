use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use crate::application::ports::{ScrapeError, WebScraper};
use crate::application::services::truncate_chars;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const MAX_FRAGMENTS: usize = 50;
const MAX_FALLBACK_LINES: usize = 100;
const MAX_CONTENT_CHARS: usize = 5000;
const MIN_PARAGRAPH_CHARS: usize = 20;
const MIN_LIST_ITEM_CHARS: usize = 10;

/// reqwest + scraper adapter: fetches a page with a browser-like identity
/// and flattens headings, paragraphs, and list items into bounded text.
pub struct HtmlScrapeAdapter {
    client: reqwest::Client,
}

impl Default for HtmlScrapeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlScrapeAdapter {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WebScraper for HtmlScrapeAdapter {
    #[tracing::instrument(skip(self))]
    async fn scrape(&self, url: &str) -> Result<String, ScrapeError> {
        let url = reqwest::Url::parse(&normalize_url(url))
            .map_err(|e| ScrapeError::InvalidUrl(e.to_string()))?;

        let response = self
            .client
            .get(url.clone())
            .timeout(FETCH_TIMEOUT)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScrapeError::Timeout
                } else {
                    ScrapeError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "scrape got non-success status");
            return Err(ScrapeError::BadStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::Transport(e.to_string()))?;

        let content = flatten_html(&body);
        tracing::info!(url = %url, chars = content.len(), "website scraped");

        Ok(content)
    }
}

fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Flattens an HTML document to at most MAX_CONTENT_CHARS of text: three
/// document-order passes (headings, long-enough paragraphs, bulleted list
/// items), falling back to the page's visible text when nothing qualifies.
fn flatten_html(html: &str) -> String {
    let doc = Html::parse_document(html);

    let mut fragments: Vec<String> = Vec::new();

    if let Ok(heading_sel) = Selector::parse("h1, h2, h3") {
        for el in doc.select(&heading_sel) {
            let text = element_text(el);
            if !text.is_empty() {
                fragments.push(text);
            }
        }
    }

    if let Ok(paragraph_sel) = Selector::parse("p") {
        for el in doc.select(&paragraph_sel) {
            let text = element_text(el);
            if text.chars().count() > MIN_PARAGRAPH_CHARS {
                fragments.push(text);
            }
        }
    }

    if let Ok(list_item_sel) = Selector::parse("li") {
        for el in doc.select(&list_item_sel) {
            let text = element_text(el);
            if text.chars().count() > MIN_LIST_ITEM_CHARS {
                fragments.push(format!("\u{2022} {text}"));
            }
        }
    }

    let content = if fragments.is_empty() {
        fallback_visible_text(&doc)
    } else {
        fragments
            .into_iter()
            .take(MAX_FRAGMENTS)
            .collect::<Vec<_>>()
            .join("\n")
    };

    truncate_chars(&content, MAX_CONTENT_CHARS)
}

/// Element text with script/style subtrees stripped, so embedded JS/CSS
/// never reaches the flattened content.
fn element_text(el: ElementRef) -> String {
    let mut raw = String::new();
    collect_visible_text(el, &mut raw);
    raw.trim().to_string()
}

/// Whole-page visible text (script/style subtrees skipped), trimmed
/// line-by-line, first MAX_FALLBACK_LINES non-empty lines.
fn fallback_visible_text(doc: &Html) -> String {
    let mut raw = String::new();
    collect_visible_text(doc.root_element(), &mut raw);

    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_FALLBACK_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_visible_text(el: ElementRef, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if name == "script" || name == "style" {
                continue;
            }
            collect_visible_text(child_el, out);
        }
    }
}
