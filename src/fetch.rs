use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use scraper::{Html, Selector};
use tracing::{debug, info};

/// CSS selector for candidate listing elements. The site's markup is not
/// stable, so this casts a wide net and lets the extractor sort it out.
pub const SECTION_SELECTOR: &str = "div[data-testid*='college'], article, .card";

/// Fetch settings, overridable via SCOUT_* environment variables
/// (SCOUT_BASE_URL, SCOUT_TIMEOUT_SECS, SCOUT_USER_AGENT).
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: "https://www.appily.com".to_string(),
            timeout_secs: 30,
            user_agent: concat!("college_scout/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let mut settings = Settings::default();
        let cfg = Config::builder()
            .add_source(config::Environment::with_prefix("SCOUT"))
            .build()
            .unwrap_or_default();

        if let Ok(v) = cfg.get_string("base_url") {
            settings.base_url = v;
        }
        if let Ok(v) = cfg.get_int("timeout_secs") {
            settings.timeout_secs = v.max(1) as u64;
        }
        if let Ok(v) = cfg.get_string("user_agent") {
            settings.user_agent = v;
        }
        settings
    }

    pub fn search_url(&self, slug: &str) -> String {
        format!(
            "{}/colleges/best-colleges/major/{}",
            self.base_url.trim_end_matches('/'),
            slug
        )
    }
}

/// Raw page content plus the two access paths the extractor needs: candidate
/// section elements (structured path) and the full markup (fallback path).
pub struct PageContent {
    html: String,
}

impl PageContent {
    pub fn from_html(html: impl Into<String>) -> Self {
        PageContent { html: html.into() }
    }

    pub fn raw(&self) -> &str {
        &self.html
    }

    /// Plain text of each candidate section element, one string per element,
    /// text nodes joined with newlines. Errors only if the selector itself
    /// cannot be compiled.
    pub fn section_texts(&self) -> Result<Vec<String>> {
        let selector = Selector::parse(SECTION_SELECTOR)
            .map_err(|e| anyhow!("section selector failed to parse: {e}"))?;
        let doc = Html::parse_document(&self.html);

        let texts = doc
            .select(&selector)
            .map(|el| {
                el.text()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();
        Ok(texts)
    }
}

/// GET one search-results page. Any failure propagates to the caller, which
/// treats it as "zero records" rather than an error the user has to act on.
pub async fn fetch_page(settings: &Settings, url: &str) -> Result<PageContent> {
    info!("Fetching {}", url);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Searching...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.clone())
        .build()
        .context("failed to build HTTP client")?;

    let result = async {
        let response = client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok::<_, anyhow::Error>(body)
    }
    .await;

    spinner.finish_and_clear();

    let body = result.with_context(|| format!("fetch failed for {url}"))?;
    debug!("Fetched {} bytes", body.len());
    Ok(PageContent::from_html(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_joins_cleanly() {
        let mut s = Settings::default();
        s.base_url = "https://example.com/".to_string();
        assert_eq!(
            s.search_url("computer-science"),
            "https://example.com/colleges/best-colleges/major/computer-science"
        );
    }

    #[test]
    fn section_texts_finds_cards() {
        let page = PageContent::from_html(
            "<html><body>\
             <article><h3>Test University of Somewhere</h3><p>$12,000</p></article>\
             <div class=\"card\"><span>Another College Here</span></div>\
             </body></html>",
        );
        let texts = page.section_texts().unwrap();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("Test University of Somewhere"));
        assert!(texts[0].contains("$12,000"));
        assert!(texts[1].contains("Another College Here"));
    }

    #[test]
    fn section_texts_empty_page() {
        let page = PageContent::from_html("<html><body><p>nothing here</p></body></html>");
        assert!(page.section_texts().unwrap().is_empty());
    }
}
