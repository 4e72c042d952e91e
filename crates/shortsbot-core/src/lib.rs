//! shortsbot-core: Core library for the Bigshorts support assistant.
//!
//! A rule-based request router for a social-media support chatbot. Most
//! traffic is answered from static tables in microseconds; only queries
//! that no rule claims reach the LLM fallback.
//!
//! - [`config`] — Typed configuration loading from JSON
//! - [`taxonomy`] — Content types, issue types, platform sections, synonyms
//! - [`detect`] — Keyword detectors (content type, issues, off-topic gate)
//! - [`repository`] — Static guides, explanations, solutions, trending data
//! - [`response`] — The tagged `BotResponse` wire union
//! - [`session`] — In-memory per-session conversation state
//! - [`router`] — The ordered stage chain behind `process_query`
//! - [`provider`] — Text-completion trait and OpenAI-compatible backend
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use shortsbot_core::config::Config;
//! use shortsbot_core::provider::openai::OpenAiProvider;
//! use shortsbot_core::router::IntentRouter;
//! use shortsbot_core::session::SessionStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let (name, entry) = config.providers.find_active().expect("no provider configured");
//! let provider = OpenAiProvider::new(
//!     name,
//!     &entry.api_key,
//!     entry.api_base.as_deref(),
//!     entry.model.as_deref().unwrap_or(&config.agent.model),
//!     reqwest::Client::new(),
//! );
//!
//! let sessions = Arc::new(SessionStore::new());
//! let router = IntentRouter::new(sessions, Arc::new(provider), &config.agent);
//! let response = router.process_query("default", "how do I create a snip?").await;
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod detect;
pub mod provider;
pub mod repository;
pub mod response;
pub mod router;
pub mod session;
pub mod taxonomy;
