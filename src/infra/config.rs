use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process-wide settings, read once at startup and handed to the fetcher and
/// summarizer when they are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub news_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub model: String,
    pub news_url: String,
    pub gemini_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api_key: None,
            gemini_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            news_url: DEFAULT_NEWS_URL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_URL.to_string(),
        }
    }
}

impl Config {
    const DOTENV_FILE: &'static str = ".env";

    /// Populate the environment from `.env` in the working directory, if any.
    /// Returns the file that was loaded. Variables already set are kept.
    pub fn load_dotenv() -> Option<PathBuf> {
        let path = Path::new(Self::DOTENV_FILE);
        dotenvy::from_path(path).ok().map(|()| path.to_path_buf())
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            news_api_key: get("NEWS_API_KEY"),
            gemini_api_key: get("GEMINI_API_KEY"),
            model: get("TECHBOT_MODEL").unwrap_or(defaults.model),
            news_url: get("TECHBOT_NEWS_URL").unwrap_or(defaults.news_url),
            gemini_base_url: get("TECHBOT_GEMINI_URL").unwrap_or(defaults.gemini_base_url),
        }
    }
}
