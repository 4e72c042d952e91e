//! shortsbot CLI — interactive support chat for the Bigshorts platform.
//!
//! Usage:
//!   shortsbot chat          — Start an interactive support session
//!   shortsbot onboard       — Create a default configuration
//!   shortsbot status        — Show current configuration and health
//!   shortsbot trending      — Show the current trending snapshot

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::sync::Arc;

use shortsbot_core::config::Config;
use shortsbot_core::provider::openai::OpenAiProvider;
use shortsbot_core::provider::TextCompletion;
use shortsbot_core::repository;
use shortsbot_core::response::{BotResponse, ButtonsContent, GuideContent};
use shortsbot_core::router::IntentRouter;
use shortsbot_core::session::SessionStore;

#[derive(Parser)]
#[command(
    name = "shortsbot",
    version,
    about = "Support assistant for the Bigshorts platform",
    long_about = "shortsbot — a rule-based support chatbot for Bigshorts.\n\nAnswers content-creation and troubleshooting questions from static guides; falls back to an LLM only for unmatched queries."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive support session
    Chat {
        /// Session id (default: "default")
        #[arg(short, long, default_value = "default")]
        session: String,
    },

    /// Create or reset the default configuration
    Onboard,

    /// Show configuration status and health
    Status,

    /// Show the current trending snapshot
    Trending,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Chat { session }) => cmd_chat(&session).await?,
        Some(Commands::Onboard) => cmd_onboard()?,
        Some(Commands::Status) => cmd_status()?,
        Some(Commands::Trending) => cmd_trending(),
        None => cmd_chat("default").await?,
    }

    Ok(())
}

// ── Shared Setup ──

/// Stand-in used when no provider is configured. The rule-based stages
/// keep working; only the generative fallback degrades.
struct UnconfiguredProvider;

#[async_trait]
impl TextCompletion for UnconfiguredProvider {
    async fn complete(
        &self,
        _prompt: &str,
        _stops: &[&str],
        _max_tokens: u32,
        _temperature: f32,
    ) -> anyhow::Result<String> {
        anyhow::bail!("no LLM provider configured; run `shortsbot onboard`")
    }
}

fn build_provider(config: &Config) -> (Arc<dyn TextCompletion>, String) {
    match config.providers.find_active() {
        Some((name, entry)) => {
            let model = entry.model.as_deref().unwrap_or(&config.agent.model);
            let provider = OpenAiProvider::new(
                name,
                &entry.api_key,
                entry.api_base.as_deref(),
                model,
                reqwest::Client::new(),
            );
            (Arc::new(provider), format!("{name} ({model})"))
        }
        None => (Arc::new(UnconfiguredProvider), "none".to_string()),
    }
}

// ── Chat Command ──

async fn cmd_chat(session_id: &str) -> Result<()> {
    let config = Config::load()?;
    if let Err(errors) = config.validate() {
        eprintln!("\n  \x1b[31mConfiguration errors:\x1b[0m");
        for e in &errors {
            eprintln!("     • {e}");
        }
        eprintln!();
        anyhow::bail!("Fix the above {} error(s) in config.json", errors.len());
    }

    let sessions = Arc::new(SessionStore::new());
    let (provider, provider_label) = build_provider(&config);
    let router = Arc::new(IntentRouter::new(
        Arc::clone(&sessions),
        provider,
        &config.agent,
    ));

    // Idle sweeper: evicts stale sessions once a minute.
    {
        let sweep_store = Arc::clone(&sessions);
        let timeout = config.sessions.idle_timeout_mins;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
            loop {
                interval.tick().await;
                sweep_store.sweep_expired(timeout);
            }
        });
    }

    println!();
    println!("  shortsbot v{}", env!("CARGO_PKG_VERSION"));
    println!("  Provider: {provider_label}");
    println!("  Session: {session_id}");
    println!();
    println!("  Ask about SHOT, SNIP, SSUP, FLIX, Collab, or any platform issue.");
    println!("  Commands: /history  /clear  /session <id>  /quit");
    println!("  ─────────────────────────────────────");
    println!();

    let mut session_id = session_id.to_string();
    let stdin = io::stdin();
    loop {
        print!("  \x1b[36m>\x1b[0m ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" | "/q" => {
                println!("  Goodbye! 👋");
                break;
            }
            "/clear" => {
                sessions.delete(&session_id);
                println!("  Session cleared.");
                continue;
            }
            "/history" => {
                match sessions.history(&session_id) {
                    Some(turns) if !turns.is_empty() => {
                        println!();
                        for turn in turns {
                            println!("  [{:?}] {}", turn.role, summarize_turn_content(&turn.content));
                        }
                        println!();
                    }
                    _ => println!("  No history yet."),
                }
                continue;
            }
            _ => {}
        }

        if let Some(new_id) = input.strip_prefix("/session ") {
            session_id = new_id.trim().to_string();
            println!("  Switched to session '{session_id}'.");
            continue;
        }

        println!();
        let response = router.process_query(&session_id, input).await;
        render_response(&response);
        println!();
    }

    Ok(())
}

fn summarize_turn_content(content: &shortsbot_core::session::TurnContent) -> String {
    use shortsbot_core::session::TurnContent;
    match content {
        TurnContent::Text(text) => text.clone(),
        TurnContent::Response(BotResponse::Message(m)) => m.clone(),
        TurnContent::Response(BotResponse::ContentGuide(g)) => format!("<guide: {}>", g.title),
        TurnContent::Response(other) => {
            serde_json::to_string(other).unwrap_or_else(|_| "<response>".to_string())
        }
    }
}

// ── Response rendering ──

fn render_response(response: &BotResponse) {
    match response {
        BotResponse::Message(m) | BotResponse::Suggestion(m) | BotResponse::Guide(m) => {
            println!("  \x1b[32m{m}\x1b[0m");
        }
        BotResponse::Issue(m) | BotResponse::Idea(m) => {
            println!("  \x1b[32m{m}\x1b[0m");
        }
        BotResponse::Error(m) => {
            println!("  \x1b[31m{m}\x1b[0m");
        }
        BotResponse::GreetingWithFaqs(g) => {
            println!("  \x1b[32m{}\x1b[0m", g.greeting);
            println!();
            println!("  Frequently asked:");
            for (i, faq) in g.faqs.iter().enumerate() {
                println!("    {}. {}", i + 1, faq.question);
            }
        }
        BotResponse::ContentGuide(guide) => render_guide(guide),
        BotResponse::SuggestionButtons(buttons) => render_buttons(buttons),
        BotResponse::ContentExplanationWithGuidePrompt(e) => {
            println!("  \x1b[32m{}\x1b[0m", e.explanation);
            println!("  {}", e.prompt);
        }
        BotResponse::Combined(c) => {
            println!("  \x1b[32m{}\x1b[0m", c.message);
            println!();
            render_buttons(&c.trending);
        }
    }
}

fn render_guide(guide: &GuideContent) {
    println!("  \x1b[1m{}\x1b[0m", guide.title);
    for step in &guide.steps {
        println!("    {}. {}", step.step, step.description);
        if let Some(ref tips) = step.tips {
            println!("       Tip: {tips}");
        }
    }
}

fn render_buttons(buttons: &ButtonsContent) {
    println!("  \x1b[32m{}\x1b[0m", buttons.message);
    for b in &buttons.buttons {
        println!("    [{}] → {}", b.text, b.destination);
    }
}

// ── Onboard Command ──

fn cmd_onboard() -> Result<()> {
    let path = Config::write_default_template()?;
    println!();
    println!("  Configuration created at:");
    println!("     {}", path.display());
    println!();
    println!("  Next steps:");
    println!("  1. Edit the config file and point it at your LLM endpoint");
    println!("  2. Run `shortsbot chat` to start chatting");
    println!();
    Ok(())
}

// ── Status Command ──

fn cmd_status() -> Result<()> {
    let config_path = Config::default_path();
    let config = Config::load()?;

    println!();
    println!("  shortsbot status");
    println!("  ─────────────────────────────────────");

    if config_path.exists() {
        println!("  Config:    {}", config_path.display());
    } else {
        println!("  Config:    not found (run `shortsbot onboard`); using defaults");
    }

    match config.providers.find_active() {
        Some((name, _)) => println!("  Provider:  {name} configured"),
        None => println!("  Provider:  none (generative fallback disabled)"),
    }

    println!("  Model:     {}", config.agent.model);
    println!(
        "  Sessions:  in-memory, {}-minute idle timeout",
        config.sessions.idle_timeout_mins
    );

    println!();
    Ok(())
}

// ── Trending Command ──

fn cmd_trending() {
    let trending = repository::trending_content();

    println!();
    println!("  Trending on Bigshorts");
    println!("  ─────────────────────────────────────");
    println!("  Snips:");
    for s in &trending.trending_snips {
        println!("    {} — {} ({} views)", s.title, s.creator, s.views);
    }
    println!("  Creators:");
    for c in &trending.trending_creators {
        println!("    {} — {} ({} followers)", c.name, c.content_type, c.followers);
    }
    println!("  Shots:");
    for s in &trending.trending_shots {
        println!("    {} — {} ({} likes)", s.title, s.creator, s.likes);
    }
    println!();
}
