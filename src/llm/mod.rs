pub mod client;
pub mod summarizer;

pub use client::{GeminiClient, TextGenerator};
pub use summarizer::Summarizer;
