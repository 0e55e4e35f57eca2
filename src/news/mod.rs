pub mod newsapi;

use crate::error::ApiError;
use async_trait::async_trait;

/// Most articles a single fetch returns.
pub const PAGE_SIZE: usize = 5;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch up to [`PAGE_SIZE`] article summaries (`"{title}. {description}"`)
    /// for a topic, newest first.
    async fn fetch(&self, query: &str) -> Result<Vec<String>, ApiError>;
}

pub use newsapi::NewsApiFetcher;
