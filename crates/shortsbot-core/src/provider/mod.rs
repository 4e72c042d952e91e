//! LLM provider trait for the generative fallback.
//!
//! The router only needs plain text completion with stop sequences; tool
//! calling and streaming are out of scope. The `openai` module covers every
//! backend with an OpenAI-compatible chat completions endpoint, including
//! local llama.cpp servers.

pub mod openai;

use async_trait::async_trait;

/// Trait for text-completion backends.
///
/// A single attempt per call: the router degrades to a canned error
/// response on failure instead of retrying, so a slow or dead backend
/// never stalls the rule-based stages.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Complete `prompt`, truncating at the first stop sequence.
    async fn complete(
        &self,
        prompt: &str,
        stops: &[&str],
        max_tokens: u32,
        temperature: f32,
    ) -> anyhow::Result<String>;
}
