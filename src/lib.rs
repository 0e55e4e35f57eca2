pub mod cli;
pub mod error;
pub mod infra;
pub mod llm;
pub mod news;
pub mod prompts;
pub mod text;

pub use error::ApiError;

#[cfg(test)]
mod test_utils;
