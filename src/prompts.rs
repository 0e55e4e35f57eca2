/// All user-facing strings and prompts for TechBot
///
/// This module centralizes all text constants for easy maintenance

// Chat Messages
pub const MSG_BANNER: &str =
    "🤖 TechBot (Gemini-powered): Ask me about the latest in technology (type 'exit' to quit).";
pub const MSG_USER_PROMPT: &str = "You: ";
pub const MSG_BOT_HEADER: &str = "TechBot:";
pub const MSG_FAREWELL: &str = "TechBot: Goodbye! 👋";
pub const MSG_NO_UPDATES: &str = "No relevant updates found.";
pub const MSG_TURN_FAILED: &str = "TechBot: Sorry, that request failed";

// Exit keywords, compared case-insensitively
pub const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

// Rendering
pub const ARTICLE_LABEL: &str = "📰 Article";

// LLM Prompts
pub fn summarize_article_prompt(text: &str) -> String {
    format!("Summarize this news article in 3-4 concise sentences:\n\n{}", text)
}

/// Only the line terminator is ignored; `" exit"` is a topic, not a command.
pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim_end_matches(&['\r', '\n'][..]);
    EXIT_KEYWORDS.iter().any(|k| input.eq_ignore_ascii_case(k))
}
