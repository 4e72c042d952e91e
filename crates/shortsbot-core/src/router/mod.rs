//! Rule-based intent router.
//!
//! `process_query` runs an ordered predicate chain over the incoming
//! message. Each stage either produces a terminal response or falls through
//! to the next; the generative backend is consulted only when every rule
//! has passed. The stage order is load-bearing — later stages assume
//! earlier ones did not match — so reorder with care.

mod scrub;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, warn};

use crate::config::AgentConfig;
use crate::detect::{detect_content_type, extract_issue, is_off_topic};
use crate::provider::TextCompletion;
use crate::repository;
use crate::repository::TrendingKind;
use crate::response::{BotResponse, CombinedContent, ExplanationContent, GreetingContent};
use crate::session::{Role, SessionStore, Turn, TurnContent};
use crate::taxonomy::{ContentType, IssueType, GREETINGS};

pub use scrub::Scrubber;

// ── Stage pattern sets ──

const WHAT_IS_PATTERNS: &[&str] = &[
    "what is", "what's", "tell me about", "explain", "describe", "define", "overview of",
];

const USER_SEARCH_PATTERNS: &[&str] = &[
    "@", "find user", "search user", "find profile", "search profile",
    "look for user", "find someone", "search for", "looking for",
];

const HELP_TERMS: &[&str] = &[
    "help", "guide", "what can you do", "features", "capabilities", "show me",
];

const TRENDING_KEYWORDS: &[&str] = &["trending", "popular", "discover", "recommended"];

const ACTION_VERBS: &[&str] = &[
    "create", "make", "how to", "guide", "tutorial", "steps", "post", "share",
    "upload", "show", "explain",
];

const AFFIRMATIONS: &[&str] = &["yes", "yeah", "sure", "ok", "okay"];

const PROBLEM_TERMS: &[&str] = &[
    "problem", "issue", "help with", "trouble", "can't", "doesn't work",
    "not working", "fix",
];

const IDEA_TRIGGERS: &[&str] = &["snip ideas", "interactive ideas", "ideas for snip"];

// ── Canned router strings ──

const USER_SEARCH_DECLINE: &str = "I'm here to help with Bigshorts features. I cannot access user data or find specific profiles. What would you like to know about creating content?";

const GENERIC_BRAND_RESPONSE: &str = "I see you're asking about Bigshorts! I can help you with creating content (SHOT, SNIP, SSUP, FLIX), managing your account, using platform features, or troubleshooting issues. What specific aspect of Bigshorts would you like to know more about?";

const AFFIRMATION_CLARIFY: &str = "I'd be happy to help! What specifically would you like guidance on? You can ask about SHOT, SNIP, SSUP, FLIX, or any other Bigshorts feature.";

const FALLBACK_ERROR: &str = "I'm sorry, I couldn't process that request. Can I help you with creating SHOT, SNIP, SSUP, FLIX, or Collab content? Or would you like guidance on other features like editing, moments, or playlists?";

const SYSTEM_PREAMBLE: &str = "You are a helpful social media assistant for the Bigshorts platform. Focus on helping users with platform features.";

const STOP_SEQUENCES: &[&str] = &["</s>", "[INST]", "User:", "Human:"];

/// Categorized feature overview returned by the help stage.
const HELP_CATEGORIES: &[(&str, &[ContentType])] = &[
    ("Content Creation", &[
        ContentType::Shot, ContentType::Snip, ContentType::Ssup,
        ContentType::Collab, ContentType::Flix,
    ]),
    ("Content Editing", &[
        ContentType::EditingAShot, ContentType::EditingASsup, ContentType::EditingASnip,
        ContentType::EditingAFlix, ContentType::InteractiveSnip,
    ]),
    ("Profile Management", &[
        ContentType::EditProfile, ContentType::MultipleAccounts, ContentType::AccountOverview,
        ContentType::ChangePassword, ContentType::BlockUnblockUser,
    ]),
    ("Content Management", &[
        ContentType::StoreDraft, ContentType::DeletePost, ContentType::EditPost,
        ContentType::SavedPosts, ContentType::PostInsights, ContentType::CreateAPlaylist,
    ]),
    ("App Settings", &[
        ContentType::Notification, ContentType::ChangeTheme, ContentType::Feedback,
        ContentType::InviteFriends, ContentType::Report, ContentType::HideUnhideUsers,
    ]),
];

/// The request router: one instance serves all sessions.
pub struct IntentRouter {
    sessions: Arc<SessionStore>,
    provider: Arc<dyn TextCompletion>,
    scrubber: Scrubber,
    rng: Mutex<StdRng>,
    session_locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
    model_max_tokens: u32,
    model_temperature: f32,
}

impl IntentRouter {
    pub fn new(
        sessions: Arc<SessionStore>,
        provider: Arc<dyn TextCompletion>,
        agent: &AgentConfig,
    ) -> Self {
        Self {
            sessions,
            provider,
            scrubber: Scrubber::new(),
            rng: Mutex::new(StdRng::from_entropy()),
            session_locks: Mutex::new(HashMap::new()),
            model_max_tokens: agent.max_tokens,
            model_temperature: agent.temperature,
        }
    }

    /// Deterministic RNG for tests; canned-text picks and the trending coin
    /// flip become reproducible.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Route one user message through the stage chain.
    ///
    /// Concurrent calls for the same session id queue on a per-session lock
    /// held across the whole routing pass, provider call included, so one
    /// session's turns never interleave.
    pub async fn process_query(&self, session_id: &str, user_input: &str) -> BotResponse {
        let lock = {
            let mut locks = self.session_locks.lock().unwrap_or_else(|e| e.into_inner());
            // Entries with no in-flight holder are stale; drop them so the
            // map tracks the session sweep.
            locks.retain(|_, l| Arc::strong_count(l) > 1);
            Arc::clone(locks.entry(session_id.to_string()).or_default())
        };
        let _guard = lock.lock().await;
        self.route(session_id, user_input).await
    }

    /// The stage chain itself. The user turn is recorded before any routing
    /// so the session reflects the message even when the outcome is an
    /// error. Every terminal response is appended to the session before
    /// being returned.
    async fn route(&self, session_id: &str, user_input: &str) -> BotResponse {
        self.sessions.append_user(session_id, user_input);
        let lower = user_input.to_lowercase();
        let trimmed = lower.trim();

        // Stage 1: bare greeting, exact match only. "hello there, I need
        // help" is not a greeting.
        if GREETINGS.contains(&trimmed) {
            let greeting = self.pick(repository::GREETING_RESPONSES);
            let response = BotResponse::GreetingWithFaqs(GreetingContent {
                greeting,
                faqs: repository::faqs(),
            });
            return self.finish(session_id, response);
        }

        let content_type = detect_content_type(user_input);

        // Stage 2: definition query about a known content type.
        if let Some(tag) = content_type {
            if WHAT_IS_PATTERNS.iter().any(|p| lower.contains(p)) {
                let response = BotResponse::ContentExplanationWithGuidePrompt(ExplanationContent {
                    explanation: repository::content_explanation(tag).to_string(),
                    content_type: tag,
                    prompt: format!(
                        "Would you like to see the step-by-step guide for creating a {}?",
                        tag.as_tag().to_uppercase()
                    ),
                });
                return self.finish(session_id, response);
            }
        }

        // Stage 3: user lookup. No access to user data.
        if USER_SEARCH_PATTERNS.iter().any(|p| lower.contains(p)) {
            return self.finish(session_id, BotResponse::Message(USER_SEARCH_DECLINE.into()));
        }

        // Stage 4: feature overview.
        if HELP_TERMS.iter().any(|t| lower.contains(t))
            && (lower.contains("content types") || lower.contains("features") || lower.contains("guides"))
        {
            return self.finish(session_id, BotResponse::Message(help_overview()));
        }

        // Stage 5: trending, sub-classified by the mentioned noun.
        if TRENDING_KEYWORDS.iter().any(|k| lower.contains(k)) {
            let kind = if lower.contains("snips") || lower.contains("video") {
                TrendingKind::Snips
            } else if lower.contains("creators") || lower.contains("users") || lower.contains("people") {
                TrendingKind::Creators
            } else if lower.contains("shots") || lower.contains("photos") || lower.contains("pictures") {
                TrendingKind::Shots
            } else {
                TrendingKind::All
            };
            let response = BotResponse::SuggestionButtons(repository::suggest_trending(kind));
            return self.finish(session_id, response);
        }

        // Stage 6: brand mention with no recognizable content type. The
        // brand name embeds the "short" synonym, so the detector claims
        // these and stage 8 answers instead; kept for synonym-table edits.
        if content_type.is_none() && lower.contains("bigshorts") {
            return self.finish(session_id, BotResponse::Message(GENERIC_BRAND_RESPONSE.into()));
        }

        // Stage 7: FAQ shorthand ("FAQ: <issue or content type>").
        if let Some(rest) = user_input.strip_prefix("FAQ:") {
            if let Some(response) = faq_shorthand(rest) {
                return self.finish(session_id, response);
            }
            // Unparseable shorthand falls through.
        }

        // Stage 8: content-type branch.
        if let Some(tag) = content_type {
            let has_action_verb = ACTION_VERBS.iter().any(|v| lower.contains(v));
            if !has_action_verb {
                if is_basic_inquiry(trimmed) {
                    // The explanatory preface lands in history as its own
                    // assistant turn; the payload is just the guide.
                    let preface = format!(
                        "{} Let me show you the guide:",
                        repository::content_explanation(tag)
                    );
                    self.sessions
                        .append_assistant(session_id, &BotResponse::Message(preface));
                    let response = BotResponse::ContentGuide(repository::creation_guide(tag));
                    return self.finish(session_id, response);
                }

                let phrase = repository::natural_phrasing(tag);
                let response = BotResponse::Suggestion(format!(
                    "It looks like you're interested in {}. Would you like me to show you how to {phrase}? Reply 'yes' or ask 'how to {phrase}'.",
                    tag.as_tag()
                ));
                return self.finish(session_id, response);
            }

            let response = BotResponse::ContentGuide(repository::creation_guide(tag));
            return self.finish(session_id, response);
        }

        // Stage 9: bare affirmation resolving a pending suggestion.
        if AFFIRMATIONS.contains(&trimmed) {
            let response = self
                .sessions
                .previous_assistant_turn(session_id)
                .and_then(|turn| resolve_affirmation(&turn))
                .unwrap_or_else(|| BotResponse::Message(AFFIRMATION_CLARIFY.into()));
            return self.finish(session_id, response);
        }

        // Stage 10: off-topic gate.
        if is_off_topic(user_input) {
            let response = BotResponse::Message(self.pick(repository::OFF_TOPIC_RESPONSES));
            return self.finish(session_id, response);
        }

        // Stage 11: issue troubleshooting needs a problem indicator AND a
        // resolvable issue type.
        if PROBLEM_TERMS.iter().any(|t| lower.contains(t)) {
            if let Some(issue) = extract_issue(user_input) {
                let solution = repository::solution_for(issue)
                    .unwrap_or(repository::ISSUE_NOT_FOUND)
                    .to_string();
                return self.finish(session_id, BotResponse::Issue(solution));
            }
        }

        // Stage 12: interactive-idea generator. Every trigger names "snip"
        // or "interactive", so stage 8 normally intercepts these with a
        // suggestion first.
        if IDEA_TRIGGERS.iter().any(|t| lower.contains(t)) {
            let idea = format!("{}{}", repository::IDEA_PREFIX, self.pick(repository::INTERACTIVE_IDEAS));
            return self.finish(session_id, BotResponse::Idea(idea));
        }

        // Stage 13: platform-section lookup.
        if let Some(section) = crate::taxonomy::PlatformSection::ALL
            .iter()
            .find(|s| lower.contains(s.as_tag()))
        {
            let explanation = repository::section_explanation(*section)
                .unwrap_or(repository::SECTION_NOT_FOUND)
                .to_string();
            return self.finish(session_id, BotResponse::Guide(explanation));
        }

        // Stage 14: generative fallback.
        let response = self.generative_fallback(session_id, user_input).await;
        self.finish(session_id, response)
    }

    async fn generative_fallback(&self, session_id: &str, query: &str) -> BotResponse {
        let prompt = self.build_prompt(session_id, query);
        debug!(session_id, prompt_len = prompt.len(), "consulting generative backend");

        match self
            .provider
            .complete(&prompt, STOP_SEQUENCES, self.model_max_tokens, self.model_temperature)
            .await
        {
            Ok(raw) => {
                let message = self.scrubber.clean(raw.trim());
                // Half the fallback replies also nudge toward trending.
                let add_trending = {
                    let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
                    rng.gen_bool(0.5)
                };
                if add_trending {
                    BotResponse::Combined(CombinedContent {
                        message,
                        trending: repository::suggest_trending(TrendingKind::All),
                    })
                } else {
                    BotResponse::Message(message)
                }
            }
            Err(err) => {
                warn!(session_id, error = %err, "generative backend failed");
                BotResponse::Error(FALLBACK_ERROR.into())
            }
        }
    }

    /// Mistral-instruct prompt: system preamble, a bounded history window
    /// (last 3 exchanges), then the current question.
    fn build_prompt(&self, session_id: &str, query: &str) -> String {
        let mut history = String::new();
        if let Some(turns) = self.sessions.history(session_id) {
            // The current user turn is already appended; exclude it.
            let prior = &turns[..turns.len().saturating_sub(1)];
            let start = prior.len().saturating_sub(6);
            for turn in &prior[start..] {
                match turn.role {
                    Role::User => {
                        if let TurnContent::Text(text) = &turn.content {
                            history.push_str(&format!("User: {text}\n"));
                        }
                    }
                    Role::Assistant => {
                        history.push_str(&format!("Assistant: {}\n", turn_summary(turn)));
                    }
                }
            }
        }

        format!(
            "<s>[INST] {SYSTEM_PREAMBLE}\n\nConversation history:\n{history}\n\nUser's question: {query}\n\nProvide a helpful response about the Bigshorts platform: [/INST]"
        )
    }

    fn pick(&self, pool: &[&str]) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        pool.choose(&mut *rng).copied().unwrap_or_default().to_string()
    }

    fn finish(&self, session_id: &str, response: BotResponse) -> BotResponse {
        self.sessions.append_assistant(session_id, &response);
        response
    }
}

/// Compact textual rendering of a turn for the LLM history window.
fn turn_summary(turn: &Turn) -> String {
    match &turn.content {
        TurnContent::Text(text) => text.clone(),
        TurnContent::Response(BotResponse::Message(m)) => m.clone(),
        TurnContent::Response(BotResponse::ContentGuide(g)) => {
            format!("I provided a guide for {}.", g.title)
        }
        TurnContent::Response(other) => {
            serde_json::to_string(other).unwrap_or_else(|_| String::new())
        }
    }
}

fn help_overview() -> String {
    let mut out = String::from("Here are the Bigshorts features I can help you with:\n\n");
    for (category, tags) in HELP_CATEGORIES {
        out.push_str(&format!("**{category}**\n"));
        let names: Vec<String> = tags.iter().map(|t| t.as_tag().to_uppercase()).collect();
        out.push_str(&names.join(", "));
        out.push_str("\n\n");
    }
    out.push_str("Ask me about any specific feature to learn more!");
    out
}

/// Parse the `FAQ:` shorthand body. Issue tags win over content types;
/// anything else becomes a guide lookup (including its not-found payload).
fn faq_shorthand(rest: &str) -> Option<BotResponse> {
    let selected = rest.trim();
    if selected.is_empty() {
        return None;
    }
    let selected_lower = selected.to_lowercase();

    if let Some(issue) = IssueType::ALL.iter().find(|it| selected_lower.contains(it.as_tag())) {
        let solution = repository::solution_for(*issue)
            .unwrap_or(repository::ISSUE_NOT_FOUND)
            .to_string();
        return Some(BotResponse::Issue(solution));
    }

    Some(BotResponse::ContentGuide(repository::creation_guide_for_text(selected)))
}

/// A "basic inquiry" is the bare tag by itself, or a what-is/tell-me/show-me
/// phrasing naming a tag verbatim.
fn is_basic_inquiry(trimmed_lower: &str) -> bool {
    ContentType::ALL.iter().any(|ct| {
        let tag = ct.as_tag();
        trimmed_lower == tag
            || trimmed_lower.contains(&format!("what is a {tag}"))
            || trimmed_lower.contains(&format!("what's a {tag}"))
            || trimmed_lower.contains(&format!("tell me about {tag}"))
            || trimmed_lower.contains(&format!("show me {tag}"))
    })
}

/// Affirmation resolution precedence over the prior assistant turn.
/// Returns `None` when nothing resolves; the caller supplies the generic
/// clarifying message.
fn resolve_affirmation(turn: &Turn) -> Option<BotResponse> {
    let guide = |tag: ContentType| BotResponse::ContentGuide(repository::creation_guide(tag));

    match &turn.content {
        // (a) explanation prompt carries the tag directly.
        TurnContent::Response(BotResponse::ContentExplanationWithGuidePrompt(e)) => {
            Some(guide(e.content_type))
        }
        TurnContent::Response(other) => {
            let text = response_text(other)?;
            // (b) any reply whose text mentions the step-by-step phrase:
            // scan for uppercased tags.
            if text.contains("step-by-step guide") {
                return scan_for_tag(&text, true).map(guide);
            }
            // (c) suggestion text, scanned case-insensitively for any tag.
            if matches!(other, BotResponse::Suggestion(_)) {
                return scan_for_tag(&text.to_lowercase(), false).map(guide);
            }
            None
        }
        // (d) plain string turn, case-insensitive scan.
        TurnContent::Text(text) => scan_for_tag(&text.to_lowercase(), false).map(guide),
    }
}

/// First declared content type whose tag occurs in `text`. With `upper`,
/// tags are uppercased before the scan (text is used as-is).
fn scan_for_tag(text: &str, upper: bool) -> Option<ContentType> {
    ContentType::ALL.iter().copied().find(|ct| {
        if upper {
            text.contains(&ct.as_tag().to_uppercase())
        } else {
            text.contains(ct.as_tag())
        }
    })
}

/// Best-effort textual content of a structured reply, for the stage-9
/// "step-by-step guide" scan.
fn response_text(response: &BotResponse) -> Option<String> {
    match response {
        BotResponse::Message(s)
        | BotResponse::Suggestion(s)
        | BotResponse::Issue(s)
        | BotResponse::Idea(s)
        | BotResponse::Guide(s)
        | BotResponse::Error(s) => Some(s.clone()),
        BotResponse::ContentExplanationWithGuidePrompt(e) => Some(e.prompt.clone()),
        BotResponse::GreetingWithFaqs(g) => Some(g.greeting.clone()),
        BotResponse::Combined(c) => Some(c.message.clone()),
        BotResponse::ContentGuide(_) | BotResponse::SuggestionButtons(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Provider stub: returns a fixed completion (optionally after a
    /// delay), or an error.
    struct FakeProvider {
        reply: Result<String, String>,
        delay: Option<std::time::Duration>,
    }

    impl FakeProvider {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self { reply: Ok(reply.to_string()), delay: None })
        }
        fn slow(reply: &str, millis: u64) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                delay: Some(std::time::Duration::from_millis(millis)),
            })
        }
        fn failing() -> Arc<Self> {
            Arc::new(Self { reply: Err("backend down".to_string()), delay: None })
        }
    }

    #[async_trait]
    impl TextCompletion for FakeProvider {
        async fn complete(
            &self,
            _prompt: &str,
            _stops: &[&str],
            _max_tokens: u32,
            _temperature: f32,
        ) -> anyhow::Result<String> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.reply.clone().map_err(anyhow::Error::msg)
        }
    }

    fn router(provider: Arc<dyn TextCompletion>) -> IntentRouter {
        IntentRouter::new(
            Arc::new(SessionStore::new()),
            provider,
            &AgentConfig::default(),
        )
        .with_rng_seed(7)
    }

    #[tokio::test]
    async fn bare_greeting_gets_greeting_with_faqs() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "hello").await {
            BotResponse::GreetingWithFaqs(g) => {
                assert!(!g.greeting.is_empty());
                assert_eq!(g.faqs.len(), 8);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn greeting_with_extra_words_is_not_a_greeting() {
        let r = router(FakeProvider::ok("unused"));
        let response = r.process_query("s", "hello there, I need help with my snip").await;
        assert!(!matches!(response, BotResponse::GreetingWithFaqs(_)));
    }

    #[tokio::test]
    async fn definition_query_offers_the_guide() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "what is a snip?").await {
            BotResponse::ContentExplanationWithGuidePrompt(e) => {
                assert_eq!(e.content_type, ContentType::Snip);
                assert!(e.prompt.contains("SNIP"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn user_search_is_declined() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "can you find user @dana for me").await {
            BotResponse::Message(m) => assert!(m.contains("cannot access user data")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn help_request_lists_feature_categories() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "help, what features do you support?").await {
            BotResponse::Message(m) => {
                assert!(m.contains("**Content Creation**"));
                assert!(m.contains("SHOT, SNIP, SSUP, COLLAB, FLIX"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn trending_subclassifies_by_noun() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "show me trending videos").await {
            BotResponse::SuggestionButtons(b) => {
                assert_eq!(b.buttons.len(), 1);
                assert_eq!(b.buttons[0].destination, "/trending/snips");
            }
            other => panic!("unexpected response: {other:?}"),
        }
        match r.process_query("s", "what's popular right now").await {
            BotResponse::SuggestionButtons(b) => assert_eq!(b.buttons.len(), 3),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    // "bigshorts" embeds the "short" synonym, so the content stage claims
    // brand mentions before the generic brand reply can.
    #[tokio::test]
    async fn brand_mention_is_claimed_by_the_content_stage() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "i have a question regarding bigshorts in general").await {
            BotResponse::Suggestion(text) => assert!(text.contains("interested in snip")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn faq_shorthand_routes_issues_and_guides() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "FAQ: login").await {
            BotResponse::Issue(text) => assert!(text.contains("logging in")),
            other => panic!("unexpected response: {other:?}"),
        }
        match r.process_query("s", "FAQ: snip").await {
            BotResponse::ContentGuide(g) => assert_eq!(g.title, "Creating a Bigshorts SNIP"),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn action_verb_query_returns_the_guide_directly() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "how to create a snip").await {
            BotResponse::ContentGuide(g) => assert_eq!(g.title, "Creating a Bigshorts SNIP"),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn bare_tag_returns_guide_with_preface_in_history() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "snip").await {
            BotResponse::ContentGuide(g) => assert_eq!(g.title, "Creating a Bigshorts SNIP"),
            other => panic!("unexpected response: {other:?}"),
        }
        let history = r.sessions.history("s").unwrap();
        // user turn, preface message, guide.
        assert_eq!(history.len(), 3);
        match &history[1].content {
            TurnContent::Response(BotResponse::Message(m)) => {
                assert!(m.ends_with("Let me show you the guide:"));
            }
            other => panic!("unexpected preface turn: {other:?}"),
        }
    }

    #[tokio::test]
    async fn content_mention_without_action_verb_becomes_suggestion() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "i keep thinking of the interactive snip thing").await {
            BotResponse::Suggestion(text) => {
                assert!(text.contains("interested in interactive snip"));
                assert!(text.contains("Reply 'yes'"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    // The suggestion scan takes the first declared tag occurring in the
    // text, so "interactive snip" resolves to the plain snip guide here.
    #[tokio::test]
    async fn yes_after_suggestion_returns_the_guide() {
        let r = router(FakeProvider::ok("unused"));
        r.process_query("s", "i keep thinking of the interactive snip thing").await;
        match r.process_query("s", "yes").await {
            BotResponse::ContentGuide(g) => assert_eq!(g.title, "Creating a Bigshorts SNIP"),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn yes_after_definition_prompt_returns_the_guide() {
        let r = router(FakeProvider::ok("unused"));
        r.process_query("s", "what is a flix?").await;
        match r.process_query("s", "okay").await {
            BotResponse::ContentGuide(g) => assert_eq!(g.title, "Creating a flix"),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn yes_with_no_pending_suggestion_asks_for_clarification() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "yes").await {
            BotResponse::Message(m) => assert!(m.contains("What specifically")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn off_topic_long_query_is_redirected() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "give me your best lasagna recipe for dinner tonight").await {
            BotResponse::Message(m) => assert!(m.contains("Bigshorts")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn issue_query_returns_canned_solution() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "there is a problem with audio, the sound doesn't work").await {
            BotResponse::Issue(text) => assert!(text.contains("audio")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    // Idea triggers always name "snip" or "interactive", so the content
    // stage intercepts them with a suggestion rather than an idea.
    #[tokio::test]
    async fn idea_trigger_is_intercepted_by_the_content_stage() {
        let r = router(FakeProvider::ok("unused"));
        match r.process_query("s", "give me some snip ideas").await {
            BotResponse::Suggestion(text) => assert!(text.contains("interested in snip")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fallback_uses_provider_and_scrubs_markers() {
        let r = router(FakeProvider::ok("Calling tool: search\nJust have fun out there!"));
        let response = r.process_query("s", "any advice to get more viewers on my posts").await;
        let message = match response {
            BotResponse::Message(m) => m,
            BotResponse::Combined(c) => c.message,
            other => panic!("unexpected response: {other:?}"),
        };
        assert_eq!(message, "Just have fun out there!");
    }

    #[tokio::test]
    async fn fallback_failure_degrades_to_error_response() {
        let r = router(FakeProvider::failing());
        match r.process_query("s", "any advice to get more viewers on my posts").await {
            BotResponse::Error(m) => assert!(m.contains("couldn't process")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    // A second message for a session with a provider call in flight must
    // wait; the history stays strictly user/assistant alternating.
    #[tokio::test]
    async fn same_session_turns_never_interleave() {
        let r = Arc::new(router(FakeProvider::slow("All done!", 200)));
        let bg = Arc::clone(&r);
        let first = tokio::spawn(async move {
            bg.process_query("s", "any advice to get more viewers on my posts").await
        });
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        r.process_query("s", "FAQ: login").await;
        first.await.unwrap();

        let roles: Vec<Role> = r
            .sessions
            .history("s")
            .unwrap()
            .iter()
            .map(|t| t.role)
            .collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
    }

    // A suggestion naming the step-by-step phrase resolves through the
    // uppercase-tag scan, not the suggestion scan.
    #[test]
    fn step_by_step_scan_outranks_suggestion_tag_scan() {
        let turn = Turn {
            role: Role::Assistant,
            content: TurnContent::Response(BotResponse::Suggestion(
                "Your shot is ready; want the step-by-step guide for SSUP?".into(),
            )),
            timestamp: chrono::Utc::now(),
        };
        match resolve_affirmation(&turn) {
            Some(BotResponse::ContentGuide(g)) => {
                assert_eq!(g.title, "Creating a Bigshorts SSUP");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[tokio::test]
    async fn prompt_window_keeps_last_three_exchanges() {
        let r = router(FakeProvider::ok("unused"));
        for i in 0..5 {
            r.process_query("s", &format!("FAQ: login {i}")).await;
        }
        r.sessions.append_user("s", "current question");
        let prompt = r.build_prompt("s", "current question");
        // 10 prior turns, window keeps the last 6.
        assert!(!prompt.contains("FAQ: login 1"));
        assert!(prompt.contains("User: FAQ: login 4"));
        assert!(prompt.contains("User's question: current question"));
    }
}
