use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chatgenius::application::ports::{ScrapeError, WebScraper};
use chatgenius::infrastructure::scrape::HtmlScrapeAdapter;

async fn serve_html(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn given_structured_page_when_scraping_then_headings_paragraphs_and_bullets_flatten_in_order() {
    let html = r#"<html><body>
        <h1>Main Title</h1>
        <p>tiny</p>
        <p>This paragraph is long enough to be kept in the output.</p>
        <ul>
            <li>short</li>
            <li>A list item worth keeping</li>
        </ul>
    </body></html>"#;
    let server = serve_html(html).await;
    let adapter = HtmlScrapeAdapter::new();

    let content = adapter.scrape(&server.uri()).await.unwrap();

    let lines: Vec<&str> = content.split('\n').collect();
    assert_eq!(lines[0], "Main Title");
    assert_eq!(
        lines[1],
        "This paragraph is long enough to be kept in the output."
    );
    assert_eq!(lines[2], "\u{2022} A list item worth keeping");
    assert_eq!(lines.len(), 3);
}

#[tokio::test]
async fn given_script_inside_paragraph_when_scraping_then_script_text_is_stripped() {
    let html = r#"<html><body>
        <p>This paragraph is long enough to keep.<script>var hidden = "INLINE_JS";</script></p>
        <ul><li>A kept item<style>.x { color: red; }</style></li></ul>
    </body></html>"#;
    let server = serve_html(html).await;
    let adapter = HtmlScrapeAdapter::new();

    let content = adapter.scrape(&server.uri()).await.unwrap();

    assert!(content.contains("This paragraph is long enough to keep."));
    assert!(content.contains("\u{2022} A kept item"));
    assert!(!content.contains("INLINE_JS"));
    assert!(!content.contains("color: red"));
}

#[tokio::test]
async fn given_page_without_matching_elements_when_scraping_then_visible_text_fallback_is_used() {
    let html = r#"<html><body>
        <div>first line</div>
        <div>second line</div>
        <script>var hidden = "should not appear";</script>
    </body></html>"#;
    let server = serve_html(html).await;
    let adapter = HtmlScrapeAdapter::new();

    let content = adapter.scrape(&server.uri()).await.unwrap();

    assert!(content.contains("first line"));
    assert!(content.contains("second line"));
    assert!(!content.contains("should not appear"));
}

#[tokio::test]
async fn given_many_fallback_lines_when_scraping_then_only_first_100_survive() {
    let divs = (1..=120)
        .map(|i| format!("<div>line {i}</div>"))
        .collect::<Vec<_>>()
        .join("\n");
    let html = format!("<html><body>\n{divs}\n</body></html>");
    let server = serve_html(&html).await;
    let adapter = HtmlScrapeAdapter::new();

    let content = adapter.scrape(&server.uri()).await.unwrap();

    let lines: Vec<&str> = content.split('\n').collect();
    assert_eq!(lines.len(), 100);
    assert_eq!(lines[0], "line 1");
    assert_eq!(lines[99], "line 100");
}

#[tokio::test]
async fn given_oversized_page_when_scraping_then_content_is_capped_at_5000_chars() {
    let long_paragraph = "word ".repeat(2000);
    let html = format!("<html><body><p>{long_paragraph}</p></body></html>");
    let server = serve_html(&html).await;
    let adapter = HtmlScrapeAdapter::new();

    let content = adapter.scrape(&server.uri()).await.unwrap();

    assert_eq!(content.chars().count(), 5000);
}

#[tokio::test]
async fn given_unparseable_url_when_scraping_then_invalid_url_is_returned() {
    let adapter = HtmlScrapeAdapter::new();

    let error = adapter.scrape("not a url at all").await.unwrap_err();

    assert!(matches!(error, ScrapeError::InvalidUrl(_)));
}

#[tokio::test]
async fn given_error_status_when_scraping_then_bad_status_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let adapter = HtmlScrapeAdapter::new();

    let error = adapter.scrape(&server.uri()).await.unwrap_err();

    assert!(matches!(error, ScrapeError::BadStatus(404)));
}
