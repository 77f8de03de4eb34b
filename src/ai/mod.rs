/// AI module for Folio
///
/// A unified interface for the assistant's LLM interactions using the Rig
/// framework, with automatic provider detection from environment variables
/// (custom completions endpoint, OpenAI, Anthropic, or Ollama).
///
/// # Architecture
///
/// - `prompt` - system-instruction composition (rules, persona, knowledge base)
/// - `client` - provider wrapper plus the polled stream store
/// - `providers` - provider-specific implementations
///
/// # Usage
///
/// ```rust,no_run
/// use folio::ai::{assistant_reply_stream_start, assistant_reply_stream_poll};
///
/// # async fn example() -> anyhow::Result<()> {
/// let id = assistant_reply_stream_start("Hi!".into(), Vec::new(), None).await?;
/// let snapshot = assistant_reply_stream_poll(id).await?;
/// # Ok(())
/// # }
/// ```
mod client;
pub mod prompt;
mod providers;

pub use client::{
    ChatError, ChatResult, FolioAI, StreamSnapshot, assistant_reply_stream_discard,
    assistant_reply_stream_poll, assistant_reply_stream_start,
};
