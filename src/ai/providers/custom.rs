//! Client for a custom OpenAI-compatible completions endpoint.
//!
//! This is the only provider path that streams true deltas; the request sets
//! `stream: true` and the response arrives as SSE `data:` lines in the OpenAI
//! chunk shape (or, for simpler gateways, `{ "content": ... }` objects).

use crate::types::{ChatMessage, Role};
use anyhow::Result;
use futures::StreamExt;
use serde::{Deserialize, Serialize};

pub struct CustomClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f64,
    stream: bool,
}

// Response shapes, OpenAI-like first, then content-only.
#[derive(Deserialize)]
struct ApiMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: Option<ApiMessage>,
    #[serde(default)]
    delta: Option<ApiDelta>,
}

#[derive(Deserialize)]
struct ApiDelta {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ContentOnlyResponse {
    content: String,
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

fn wire_messages<'a>(system: &'a str, messages: &'a [ChatMessage]) -> Vec<WireMessage<'a>> {
    let mut wire = Vec::with_capacity(messages.len() + 1);
    wire.push(WireMessage {
        role: "system",
        content: system,
    });
    wire.extend(messages.iter().map(|msg| WireMessage {
        role: wire_role(msg.role),
        content: &msg.content,
    }));
    wire
}

impl CustomClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    /// Single-shot completion.
    pub async fn complete(
        &self,
        system: &str,
        messages: &[ChatMessage],
        temperature: f64,
    ) -> Result<String> {
        let mut request = self.client.post(&self.endpoint).json(&CompletionRequest {
            model: &self.model,
            messages: wire_messages(system, messages),
            temperature,
            stream: false,
        });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!("completions endpoint error {status}: {body}"));
        }

        if let Ok(parsed) = serde_json::from_str::<ApiResponse>(&body)
            && let Some(choice) = parsed.choices.into_iter().next()
            && let Some(msg) = choice.message
        {
            return Ok(msg.content);
        }

        if let Ok(parsed) = serde_json::from_str::<ContentOnlyResponse>(&body) {
            return Ok(parsed.content);
        }

        // Fallback to raw body
        Ok(body)
    }

    /// Streaming completion. Calls `on_piece` for every delta in arrival
    /// order; returns once the provider signals the end of the stream.
    pub async fn complete_stream(
        &self,
        system: &str,
        messages: &[ChatMessage],
        temperature: f64,
        mut on_piece: impl FnMut(&str),
    ) -> Result<()> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header("accept", "text/event-stream")
            .json(&CompletionRequest {
                model: &self.model,
                messages: wire_messages(system, messages),
                temperature,
                stream: true,
            });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("completions endpoint error {status}: {body}"));
        }

        // SSE framing: accumulate data: lines until a blank line ends the event.
        let mut buffer = String::new();
        let mut data_acc: Option<String> = None;
        let mut stream = response.bytes_stream();
        while let Some(item) = stream.next().await {
            let bytes = item?;
            let chunk = String::from_utf8_lossy(&bytes);
            buffer.push_str(&chunk);
            while let Some(pos) = buffer.find('\n') {
                let mut line = buffer[..pos].to_string();
                if line.ends_with('\r') {
                    line.pop();
                }
                buffer = buffer[pos + 1..].to_string();

                if line.is_empty() {
                    if let Some(data) = data_acc.take()
                        && let Some((piece, done)) = parse_sse_data(&data)
                    {
                        if !piece.is_empty() {
                            on_piece(&piece);
                        }
                        if done {
                            return Ok(());
                        }
                    }
                    continue;
                }

                if let Some(rest) = line.strip_prefix("data:") {
                    let s = rest.trim_start();
                    match &mut data_acc {
                        Some(acc) => acc.push_str(s),
                        None => data_acc = Some(s.to_string()),
                    }
                }
            }
        }

        Ok(())
    }
}

/// Parse one SSE `data:` payload into (text piece, done flag).
pub fn parse_sse_data(data: &str) -> Option<(String, bool)> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed == "[DONE]" {
        return Some((String::new(), true));
    }

    if let Ok(parsed) = serde_json::from_str::<ApiResponse>(trimmed) {
        if let Some(first) = parsed.choices.into_iter().next() {
            if let Some(delta) = first.delta
                && let Some(piece) = delta.content
            {
                return Some((piece, false));
            }
            if let Some(msg) = first.message {
                return Some((msg.content, false));
            }
        }
        return Some((String::new(), false));
    }
    if let Ok(parsed) = serde_json::from_str::<ContentOnlyResponse>(trimmed) {
        return Some((parsed.content, false));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_chunks_concatenate_across_boundaries() {
        let events = vec![
            r#"{"choices":[{"delta":{"content":"Hel"}}]}"#,
            r#"{"choices":[{"delta":{"content":"lo "}}]}"#,
            r#"{"choices":[{"delta":{"content":"world"}}]}"#,
            "[DONE]",
        ];
        let mut acc = String::new();
        let mut finished = false;
        for event in events {
            if let Some((piece, done)) = parse_sse_data(event) {
                acc.push_str(&piece);
                finished = done;
            }
        }
        assert_eq!(acc, "Hello world");
        assert!(finished);
    }

    #[test]
    fn content_only_payloads_parse() {
        assert_eq!(
            parse_sse_data(r#"{"content":"hi"}"#),
            Some(("hi".to_string(), false))
        );
    }

    #[test]
    fn empty_delta_is_not_the_end() {
        assert_eq!(
            parse_sse_data(r#"{"choices":[{"delta":{}}]}"#),
            Some((String::new(), false))
        );
    }

    #[test]
    fn garbage_is_skipped() {
        assert_eq!(parse_sse_data("not json"), None);
        assert_eq!(parse_sse_data("   "), None);
    }

    #[test]
    fn wire_messages_lead_with_the_system_turn() {
        let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
        let wire = wire_messages("rules", &history);
        assert_eq!(wire.len(), 3);
        assert_eq!(wire[0].role, "system");
        assert_eq!(wire[0].content, "rules");
        assert_eq!(wire[1].role, "user");
        assert_eq!(wire[2].role, "assistant");
    }
}
