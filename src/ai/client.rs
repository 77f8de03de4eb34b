use crate::ai::prompt::compose_system_prompt;
use crate::ai::providers::ProviderClient;
use crate::chat::personas::Persona;
use crate::types::ChatMessage;
use anyhow::Result;
use once_cell::sync::Lazy;
use rig::client::CompletionClient;
use rig::completion::Chat;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Fixed sampling temperature for every assistant reply.
const REPLY_TEMPERATURE: f64 = 0.7;
const MAX_REPLY_TOKENS: u64 = 1024;

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ChatError(String);

impl ChatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::new(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Streaming State Management
// ============================================

static STREAM_STORE: Lazy<StreamStore> = Lazy::new(StreamStore::default);

struct StreamStore {
    counter: AtomicU64,
    entries: Mutex<HashMap<u64, StreamEntry>>,
}

impl Default for StreamStore {
    fn default() -> Self {
        Self {
            counter: AtomicU64::new(1),
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[derive(Default)]
struct StreamEntry {
    buffer: String,
    done: bool,
    error: Option<String>,
}

/// Poll result: the cumulative text so far, whether the stream has ended, and
/// the failure text when it ended badly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StreamSnapshot {
    pub text: String,
    pub done: bool,
    pub error: Option<String>,
}

impl StreamStore {
    fn create_handle(&self) -> StreamHandle {
        let id = self.counter.fetch_add(1, Ordering::Relaxed);
        let mut entries = self.entries.lock().expect("stream store poisoned");
        entries.insert(id, StreamEntry::default());
        StreamHandle { id }
    }

    fn append(&self, id: u64, chunk: &str) {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        if let Some(entry) = entries.get_mut(&id) {
            entry.buffer.push_str(chunk);
        }
    }

    fn finish(&self, id: u64) {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        if let Some(entry) = entries.get_mut(&id) {
            entry.done = true;
        }
    }

    fn fail(&self, id: u64, message: String) {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        if let Some(entry) = entries.get_mut(&id) {
            entry.error = Some(message);
            entry.done = true;
        }
    }

    fn snapshot(&self, id: u64) -> ChatResult<StreamSnapshot> {
        let entries = self.entries.lock().expect("stream store poisoned");
        if let Some(entry) = entries.get(&id) {
            Ok(StreamSnapshot {
                text: entry.buffer.clone(),
                done: entry.done,
                error: entry.error.clone(),
            })
        } else {
            Err(ChatError::new("invalid stream id"))
        }
    }

    fn remove(&self, id: u64) {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        entries.remove(&id);
    }
}

#[derive(Clone)]
pub struct StreamHandle {
    id: u64,
}

impl StreamHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn append(&self, piece: &str) {
        STREAM_STORE.append(self.id, piece);
    }

    pub fn finish(&self) {
        STREAM_STORE.finish(self.id);
    }

    pub fn fail(&self, err: &str) {
        STREAM_STORE.fail(self.id, err.to_string());
    }
}

/// Unified AI client wrapper for the portfolio assistant.
/// Handles provider auto-detection and agent configuration.
pub struct FolioAI {
    client: ProviderClient,
}

impl FolioAI {
    /// Create AI client from environment configuration
    pub fn from_env() -> Result<Self> {
        let client = ProviderClient::from_env()?;
        Ok(Self { client })
    }

    /// Answer `prompt` given `history`, pushing text into `handle` as it
    /// arrives. The custom endpoint streams true deltas; Rig providers reply
    /// whole and are appended as a single chunk.
    pub async fn stream_reply(
        &self,
        handle: &StreamHandle,
        prompt: &str,
        history: &[ChatMessage],
        persona: Option<Persona>,
    ) -> Result<()> {
        let system = compose_system_prompt(persona);
        match &self.client {
            ProviderClient::Custom(client) => {
                let mut conversation = history.to_vec();
                conversation.push(ChatMessage::user(prompt));
                client
                    .complete_stream(&system, &conversation, REPLY_TEMPERATURE, |piece| {
                        handle.append(piece);
                    })
                    .await
            }
            ProviderClient::OpenAI(client) => {
                let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(&system)
                    .max_tokens(MAX_REPLY_TOKENS)
                    .temperature(REPLY_TEMPERATURE)
                    .build();

                let reply = agent.chat(prompt, convert_to_rig_messages(history)).await?;
                handle.append(&reply);
                Ok(())
            }
            ProviderClient::Anthropic(client) => {
                let model = env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(&system)
                    .max_tokens(MAX_REPLY_TOKENS)
                    .temperature(REPLY_TEMPERATURE)
                    .build();

                let reply = agent.chat(prompt, convert_to_rig_messages(history)).await?;
                handle.append(&reply);
                Ok(())
            }
            ProviderClient::Ollama(client) => {
                let model = env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.1:latest".to_string());

                let agent = client.agent(&model).preamble(&system).build();

                let reply = agent.chat(prompt, convert_to_rig_messages(history)).await?;
                handle.append(&reply);
                Ok(())
            }
        }
    }
}

/// Convert portfolio ChatMessage to Rig Message format
fn convert_to_rig_messages(messages: &[ChatMessage]) -> Vec<rig::message::Message> {
    messages
        .iter()
        .map(|msg| match msg.role {
            crate::types::Role::User => rig::message::Message::user(&msg.content),
            crate::types::Role::Assistant => rig::message::Message::assistant(&msg.content),
        })
        .collect()
}

// ============================================
// Public API Functions
// ============================================

/// Start an assistant reply. Returns a stream id to poll; the request runs to
/// completion or failure on its own, with no timeout and no retry.
pub async fn assistant_reply_stream_start(
    prompt: String,
    history: Vec<ChatMessage>,
    persona: Option<Persona>,
) -> ChatResult<u64> {
    let handle = STREAM_STORE.create_handle();
    let id = handle.id();

    tokio::spawn(async move {
        let ai = match FolioAI::from_env() {
            Ok(ai) => ai,
            Err(err) => {
                tracing::warn!(error = %err, "assistant provider unavailable");
                handle.fail(&err.to_string());
                return;
            }
        };
        match ai.stream_reply(&handle, &prompt, &history, persona).await {
            Ok(()) => handle.finish(),
            Err(err) => {
                tracing::warn!(error = %err, "assistant reply failed");
                handle.fail(&err.to_string());
            }
        }
    });

    Ok(id)
}

/// Poll a reply stream for its cumulative state.
pub async fn assistant_reply_stream_poll(id: u64) -> ChatResult<StreamSnapshot> {
    STREAM_STORE.snapshot(id)
}

/// Drop a finished stream's buffer.
pub fn assistant_reply_stream_discard(id: u64) {
    STREAM_STORE.remove(id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_accumulate_appended_chunks() {
        let handle = STREAM_STORE.create_handle();
        let chunks = ["stream", "ing ", "reply"];
        let mut expected = String::new();
        for chunk in chunks {
            handle.append(chunk);
            expected.push_str(chunk);
            let snap = STREAM_STORE.snapshot(handle.id()).unwrap();
            assert_eq!(snap.text, expected);
            assert!(!snap.done);
        }
        handle.finish();
        let snap = STREAM_STORE.snapshot(handle.id()).unwrap();
        assert_eq!(snap.text, "streaming reply");
        assert!(snap.done);
        assert_eq!(snap.error, None);
        assistant_reply_stream_discard(handle.id());
    }

    #[test]
    fn failed_streams_carry_the_error_and_keep_partial_text() {
        let handle = STREAM_STORE.create_handle();
        handle.append("partial");
        handle.fail("HTTP 429 from provider");
        let snap = STREAM_STORE.snapshot(handle.id()).unwrap();
        assert!(snap.done);
        assert_eq!(snap.text, "partial");
        assert_eq!(snap.error.as_deref(), Some("HTTP 429 from provider"));
        assistant_reply_stream_discard(handle.id());
    }

    #[test]
    fn empty_finished_stream_is_distinguishable() {
        let handle = STREAM_STORE.create_handle();
        handle.finish();
        let snap = STREAM_STORE.snapshot(handle.id()).unwrap();
        assert!(snap.done && snap.text.is_empty() && snap.error.is_none());
        assistant_reply_stream_discard(handle.id());
    }

    #[test]
    fn unknown_stream_id_is_an_error() {
        assert!(STREAM_STORE.snapshot(u64::MAX).is_err());
    }
}
