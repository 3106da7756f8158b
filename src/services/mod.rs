//! Outbound API clients

pub mod gemini_client;
pub mod youtube_client;

pub use gemini_client::{CompletionResult, GeminiClient};
pub use youtube_client::{VideoCandidate, YouTubeClient};
