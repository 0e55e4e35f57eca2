use anyhow::{Context, Result};
use colored::*;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::llm::{Summarizer, TextGenerator};
use crate::news::NewsSource;
use crate::prompts;

/// Interactive read-fetch-summarize-print loop. Each turn blocks until every
/// outbound call has finished; nothing is carried over between turns.
pub struct ChatLoop<N, G> {
    news: N,
    summarizer: Summarizer<G>,
    color: bool,
}

impl<N: NewsSource, G: TextGenerator> ChatLoop<N, G> {
    pub fn new(news: N, generator: G) -> Self {
        Self {
            news,
            summarizer: Summarizer::new(generator),
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Fetch and summarize one topic query.
    pub async fn respond(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let articles = self.news.fetch(query).await?;
        info!(query, count = articles.len(), "Fetched articles");
        self.summarizer.summarize(&articles).await
    }

    /// Run until an exit keyword is entered or input ends.
    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.styled(prompts::MSG_BANNER))?;

        let mut turn = 0usize;
        loop {
            write!(output, "\n{}", self.styled(prompts::MSG_USER_PROMPT))?;
            output.flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Failed to read input")?;
            if read == 0 {
                // stdin closed; keep the farewell off the prompt line
                writeln!(output)?;
            }
            if read == 0 || prompts::is_exit_command(&line) {
                writeln!(output, "{}", prompts::MSG_FAREWELL)?;
                info!(turns = turn, "Chat ended");
                return Ok(());
            }

            turn += 1;
            let query = line.trim_end_matches(&['\r', '\n'][..]);

            match self.respond(query).await {
                Ok(replies) => {
                    writeln!(output, "\n{}\n", self.styled(prompts::MSG_BOT_HEADER))?;
                    for reply in replies {
                        writeln!(output, "{}\n", reply)?;
                    }
                }
                Err(e) => {
                    warn!(turn, error = %e, "Turn failed");
                    writeln!(output, "\n{}", self.styled_error(&e))?;
                }
            }
        }
    }

    fn styled_error(&self, err: &ApiError) -> String {
        let message = format!("{}: {}", prompts::MSG_TURN_FAILED, err);
        if self.color {
            message.red().to_string()
        } else {
            message
        }
    }

    fn styled(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
