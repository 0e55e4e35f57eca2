use tracing::{debug, info};

use crate::error::ApiError;
use crate::llm::TextGenerator;
use crate::prompts;
use crate::text;

pub const MAX_ARTICLE_CHARS: usize = 2000;
pub const LINE_WIDTH: usize = 80;

/// Summarizes fetched articles one at a time and renders them for the terminal.
pub struct Summarizer<G> {
    generator: G,
}

impl<G: TextGenerator> Summarizer<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// One rendered summary per article, in input order. An empty input yields
    /// the single "no updates" placeholder; the first failed model call aborts.
    pub async fn summarize(&self, articles: &[String]) -> Result<Vec<String>, ApiError> {
        if articles.is_empty() {
            return Ok(vec![prompts::MSG_NO_UPDATES.to_string()]);
        }

        let mut summaries = Vec::with_capacity(articles.len());
        for (i, article) in articles.iter().enumerate() {
            let index = i + 1;
            let prompt = Self::build_prompt(article);

            debug!(index, prompt_chars = prompt.chars().count(), "Summarizing article");
            let reply = self.generator.generate(&prompt).await?;

            summaries.push(Self::render(index, &reply));
        }

        info!(count = summaries.len(), "Summarized articles");
        Ok(summaries)
    }

    fn build_prompt(article: &str) -> String {
        prompts::summarize_article_prompt(text::truncate_chars(article, MAX_ARTICLE_CHARS))
    }

    fn render(index: usize, reply: &str) -> String {
        text::fill(
            &format!("{} {}: {}", prompts::ARTICLE_LABEL, index, reply.trim()),
            LINE_WIDTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records every prompt and answers with a canned reply.
    #[derive(Default)]
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        reply: String,
    }

    #[async_trait]
    impl<'a> TextGenerator for &'a RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, ApiError> {
            Err(ApiError::classify_status(429, "quota"))
        }
    }

    fn recorder(reply: &str) -> RecordingGenerator {
        RecordingGenerator {
            reply: reply.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_input_yields_placeholder() {
        let generator = recorder("unused");
        let summaries = Summarizer::new(&generator).summarize(&[]).await.unwrap();

        assert_eq!(summaries, vec!["No relevant updates found."]);
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn labels_each_summary_in_order() {
        let generator = recorder("  Short summary.\n");
        let articles = vec!["A. ".to_string(), "B. ".to_string()];
        let summaries = Summarizer::new(&generator).summarize(&articles).await.unwrap();

        assert_eq!(
            summaries,
            vec!["📰 Article 1: Short summary.", "📰 Article 2: Short summary."]
        );

        let sent = generator.prompts.lock().unwrap();
        assert_eq!(
            *sent,
            vec![
                "Summarize this news article in 3-4 concise sentences:\n\nA. ",
                "Summarize this news article in 3-4 concise sentences:\n\nB. ",
            ]
        );
    }

    #[tokio::test]
    async fn truncates_articles_over_limit() {
        let generator = recorder("ok");
        let long = "é".repeat(MAX_ARTICLE_CHARS + 1);
        let exact = "a".repeat(MAX_ARTICLE_CHARS);
        Summarizer::new(&generator)
            .summarize(&[long, exact.clone()])
            .await
            .unwrap();

        let sent = generator.prompts.lock().unwrap();
        let header = prompts::summarize_article_prompt("");
        assert_eq!(sent[0].chars().count() - header.chars().count(), MAX_ARTICLE_CHARS);
        assert_eq!(sent[1], prompts::summarize_article_prompt(&exact));
    }

    #[tokio::test]
    async fn wraps_rendered_summary_at_line_width() {
        let generator = recorder(&"word ".repeat(60));
        let summaries = Summarizer::new(&generator)
            .summarize(&["A. ".to_string()])
            .await
            .unwrap();

        assert!(summaries[0].starts_with("📰 Article 1: word word"));
        assert!(summaries[0].lines().count() > 1);
        for line in summaries[0].lines() {
            assert!(line.chars().count() <= LINE_WIDTH);
        }
    }

    #[tokio::test]
    async fn model_failure_aborts() {
        let err = Summarizer::new(FailingGenerator)
            .summarize(&["A. ".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Quota { .. }));
    }
}
