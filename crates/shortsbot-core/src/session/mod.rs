//! Per-session conversation state.
//!
//! Sessions live in memory behind a mutex; the store is shared between the
//! router and the idle sweeper. History is append-only within a session and
//! never leaks between session ids.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::response::BotResponse;

pub const DEFAULT_IDLE_TIMEOUT_MINS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// What a turn carries: raw user text, or the structured reply the router
/// produced. Keeping the structured form lets the affirmation resolver
/// inspect the previous reply without re-parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TurnContent {
    Text(String),
    Response(BotResponse),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: TurnContent,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub turns: Vec<Turn>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl Session {
    fn new(id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            turns: Vec::new(),
            created_at: now,
            last_active: now,
        }
    }

    fn push(&mut self, role: Role, content: TurnContent) {
        let now = Utc::now();
        self.turns.push(Turn { role, content, timestamp: now });
        self.last_active = now;
    }
}

/// Shared in-memory session store.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn, creating the session on first contact.
    pub fn append_user(&self, session_id: &str, text: &str) {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id));
        session.push(Role::User, TurnContent::Text(text.to_string()));
    }

    /// Append the router's reply to an existing (or new) session.
    pub fn append_assistant(&self, session_id: &str, response: &BotResponse) {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id));
        session.push(Role::Assistant, TurnContent::Response(response.clone()));
    }

    /// Snapshot of a session's turns, oldest first. `None` for unknown ids.
    pub fn history(&self, session_id: &str) -> Option<Vec<Turn>> {
        let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions.get(session_id).map(|s| s.turns.clone())
    }

    /// The assistant turn immediately before the latest user turn.
    ///
    /// Called after the current user turn has been appended, so the turn of
    /// interest sits two slots from the tail. Yields `None` at conversation
    /// start or when the preceding turn is not an assistant turn.
    pub fn previous_assistant_turn(&self, session_id: &str) -> Option<Turn> {
        let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        let turns = &sessions.get(session_id)?.turns;
        let turn = turns.get(turns.len().checked_sub(2)?)?;
        (turn.role == Role::Assistant).then(|| turn.clone())
    }

    /// Session ids with turn counts and last-activity timestamps.
    pub fn list(&self) -> Vec<(String, usize, DateTime<Utc>)> {
        let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        let mut out: Vec<_> = sessions
            .values()
            .map(|s| (s.id.clone(), s.turns.len(), s.last_active))
            .collect();
        out.sort_by(|a, b| b.2.cmp(&a.2));
        out
    }

    /// Remove one session. Returns whether it existed.
    pub fn delete(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions.remove(session_id).is_some()
    }

    /// Drop every session.
    pub fn clear(&self) -> usize {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        let n = sessions.len();
        sessions.clear();
        n
    }

    /// Evict sessions idle longer than `timeout_mins`. Returns the number
    /// evicted. Run periodically by the CLI's background sweeper.
    pub fn sweep_expired(&self, timeout_mins: i64) -> usize {
        let cutoff = Utc::now() - Duration::minutes(timeout_mins);
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        let before = sessions.len();
        sessions.retain(|_, s| s.last_active >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "swept idle sessions");
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_ordered_and_isolated_per_session() {
        let store = SessionStore::new();
        store.append_user("a", "hello");
        store.append_assistant("a", &BotResponse::Message("hi".into()));
        store.append_user("b", "unrelated");

        let a = store.history("a").unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].role, Role::User);
        assert_eq!(a[0].content, TurnContent::Text("hello".into()));
        assert_eq!(a[1].role, Role::Assistant);

        assert_eq!(store.history("b").unwrap().len(), 1);
        assert!(store.history("missing").is_none());
    }

    #[test]
    fn previous_assistant_turn_looks_two_back() {
        let store = SessionStore::new();
        store.append_user("s", "what is snip");
        // No assistant turn before the first user turn.
        assert!(store.previous_assistant_turn("s").is_none());

        store.append_assistant("s", &BotResponse::Suggestion("want a guide?".into()));
        store.append_user("s", "yes");
        let prev = store.previous_assistant_turn("s").unwrap();
        assert_eq!(prev.role, Role::Assistant);
        assert_eq!(
            prev.content,
            TurnContent::Response(BotResponse::Suggestion("want a guide?".into()))
        );
    }

    #[test]
    fn two_consecutive_user_turns_yield_no_previous_assistant() {
        let store = SessionStore::new();
        store.append_user("s", "first");
        store.append_user("s", "second");
        assert!(store.previous_assistant_turn("s").is_none());
    }

    #[test]
    fn sweep_evicts_only_idle_sessions() {
        let store = SessionStore::new();
        store.append_user("old", "hi");
        {
            let mut sessions = store.sessions.lock().unwrap();
            sessions.get_mut("old").unwrap().last_active =
                Utc::now() - Duration::minutes(DEFAULT_IDLE_TIMEOUT_MINS + 5);
        }
        store.append_user("fresh", "hi");

        assert_eq!(store.sweep_expired(DEFAULT_IDLE_TIMEOUT_MINS), 1);
        assert!(store.history("old").is_none());
        assert!(store.history("fresh").is_some());
    }

    #[test]
    fn delete_and_clear() {
        let store = SessionStore::new();
        store.append_user("x", "hi");
        store.append_user("y", "hi");
        assert!(store.delete("x"));
        assert!(!store.delete("x"));
        assert_eq!(store.clear(), 1);
        assert!(store.list().is_empty());
    }
}
