use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing::debug;

use crate::cli::ChatLoop;
use crate::infra::{logging, Config};
use crate::llm::GeminiClient;
use crate::news::NewsApiFetcher;

#[derive(Parser, Debug)]
#[command(name = "techbot")]
#[command(about = "Ask for a topic, get the latest news on it summarized by Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// NewsAPI key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Gemini model used for summaries
    #[arg(long, env = "TECHBOT_MODEL")]
    pub model: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the flags over the environment-derived config.
    pub fn apply(&self, mut config: Config) -> Config {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());

        if let Some(key) = non_empty(&self.news_api_key) {
            config.news_api_key = Some(key);
        }
        if let Some(key) = non_empty(&self.gemini_api_key) {
            config.gemini_api_key = Some(key);
        }
        if let Some(model) = non_empty(&self.model) {
            config.model = model;
        }
        config
    }
}

pub async fn run() -> Result<()> {
    // .env must be loaded before clap reads env-backed flags
    let dotenv = Config::load_dotenv();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &dotenv {
        Some(path) => debug!(path = %path.display(), "Loaded environment file"),
        None => debug!("No .env file loaded"),
    }

    let config = cli.apply(Config::from_env());
    debug!(
        model = %config.model,
        news_key_set = config.news_api_key.is_some(),
        gemini_key_set = config.gemini_api_key.is_some(),
        "Configuration loaded"
    );

    let news = NewsApiFetcher::new(&config);
    let generator = GeminiClient::new(&config);
    let chat = ChatLoop::new(news, generator).with_color(std::io::stdout().is_terminal());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    chat.run(stdin.lock(), &mut stdout).await
}
