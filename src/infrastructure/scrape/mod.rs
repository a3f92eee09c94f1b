mod html_scrape_adapter;

pub use html_scrape_adapter::HtmlScrapeAdapter;
