pub mod custom;

use anyhow::Result;
use rig::providers;
use std::env;

pub use custom::CustomClient;

/// Enum to hold different provider clients
pub enum ProviderClient {
    Custom(CustomClient),
    OpenAI(providers::openai::Client),
    Anthropic(providers::anthropic::Client),
    Ollama(providers::ollama::Client),
}

impl ProviderClient {
    /// Auto-detect and configure provider from environment variables
    pub fn from_env() -> Result<Self> {
        // Priority order:
        // 1. COMPLETIONS_ENDPOINT → custom OpenAI-compatible endpoint
        // 2. OPENAI_API_KEY → OpenAI
        // 3. ANTHROPIC_API_KEY → Claude
        // 4. LLM_USE_OLLAMA=true → Ollama

        if let Ok(endpoint) = env::var("COMPLETIONS_ENDPOINT") {
            let model = env::var("COMPLETIONS_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
            let api_key = env::var("COMPLETIONS_API_KEY").ok();

            return Ok(Self::Custom(CustomClient::new(endpoint, model, api_key)));
        }

        if let Ok(key) = env::var("OPENAI_API_KEY") {
            return Ok(Self::OpenAI(providers::openai::Client::new(&key)));
        }

        if let Ok(key) = env::var("ANTHROPIC_API_KEY") {
            return Ok(Self::Anthropic(providers::anthropic::Client::new(&key)));
        }

        let use_ollama = env::var("LLM_USE_OLLAMA")
            .unwrap_or_else(|_| "false".into())
            .to_ascii_lowercase();

        if matches!(use_ollama.as_str(), "1" | "true" | "yes" | "on") {
            // Ollama endpoint is configured via OLLAMA_HOST environment variable
            // The Rig client reads this automatically (defaults to http://localhost:11434)
            return Ok(Self::Ollama(providers::ollama::Client::new()));
        }

        Err(anyhow::anyhow!(
            "No AI provider configured. Set COMPLETIONS_ENDPOINT, OPENAI_API_KEY, ANTHROPIC_API_KEY, or LLM_USE_OLLAMA=true"
        ))
    }
}
