use async_trait::async_trait;
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::error::ApiError;
use crate::infra::Config;
use crate::news::{NewsSource, PAGE_SIZE};

/// Client for the NewsAPI `everything` endpoint.
#[derive(Debug, Clone)]
pub struct NewsApiFetcher {
    api_key: Option<String>,
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Option<Vec<NewsArticle>>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl NewsArticle {
    /// A missing title renders as `None`, a missing description as nothing.
    fn summary(&self) -> String {
        format!(
            "{}. {}",
            self.title.as_deref().unwrap_or("None"),
            self.description.as_deref().unwrap_or_default()
        )
    }
}

impl NewsApiFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.news_api_key.clone(),
            url: config.news_url.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", query.to_string())];
        if let Some(key) = &self.api_key {
            params.push(("apiKey", key.clone()));
        }
        params.push(("language", "en".to_string()));
        params.push(("pageSize", PAGE_SIZE.to_string()));
        params.push(("sortBy", "publishedAt".to_string()));
        params
    }
}

/// Turn a response body into article summaries. A payload without `articles`
/// (auth or quota errors included) yields an empty list.
pub fn parse_articles(body: &str) -> Result<Vec<String>, ApiError> {
    let response: NewsResponse = serde_json::from_str(body)?;

    match response.articles {
        Some(articles) => Ok(articles.iter().take(PAGE_SIZE).map(NewsArticle::summary).collect()),
        None => {
            warn!(
                code = response.code.as_deref().unwrap_or("unknown"),
                message = response.message.as_deref().unwrap_or(""),
                "News response has no articles"
            );
            Ok(Vec::new())
        }
    }
}

#[async_trait]
impl NewsSource for NewsApiFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let t0 = Instant::now();

        let response = self.client
            .get(&self.url)
            .query(&self.query_params(query))
            .send()
            .await?;

        // Error payloads carry no `articles`; the status is only logged
        let status = response.status();
        let body = response.text().await?;
        let articles = parse_articles(&body)?;

        debug!(
            status = status.as_u16(),
            count = articles.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched news"
        );

        Ok(articles)
    }
}
