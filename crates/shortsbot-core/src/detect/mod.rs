//! Keyword detectors — zero-cost classification over the static taxonomy.
//!
//! These are pure functions over the synonym tables. No LLM tokens are spent
//! on routing: a substring scan with a longest-match-first precedence rule is
//! enough to classify the vast majority of support queries.

use std::cmp::Reverse;

use crate::taxonomy::{
    ContentType, IssueType, ISSUE_KEYWORDS, OFF_TOPIC_KEYWORDS, ON_TOPIC_EXTRAS,
    PlatformSection, SYNONYMS,
};

/// Outcome of [`standardize`]: either a canonical tag, or the lowercased
/// input passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standardized {
    Tag(ContentType),
    Raw(String),
}

/// Detect the content type a query refers to, or `None`.
///
/// Precedence: canonical tags are checked before synonyms, and within each
/// table longer literals always beat shorter ones regardless of declaration
/// order. Many short synonyms are substrings of longer, more specific ones
/// ("snip" vs "interactive snip"), so the tie-break is load-bearing.
pub fn detect_content_type(query: &str) -> Option<ContentType> {
    let lower = query.to_lowercase();

    let mut tags: Vec<ContentType> = ContentType::ALL.to_vec();
    tags.sort_by_key(|ct| Reverse(ct.as_tag().len()));
    if let Some(ct) = tags.iter().find(|ct| lower.contains(ct.as_tag())) {
        return Some(*ct);
    }

    let mut synonyms: Vec<&(&str, ContentType)> = SYNONYMS.iter().collect();
    synonyms.sort_by_key(|(phrase, _)| Reverse(phrase.len()));
    synonyms
        .iter()
        .find(|(phrase, _)| lower.contains(phrase))
        .map(|(_, ct)| *ct)
}

/// Normalize free text to a canonical content type where possible.
///
/// Used by guide and section lookups as a pre-pass. Uses the same
/// longest-match precedence as [`detect_content_type`]; unmatched input is
/// passed through lowercased.
pub fn standardize(text: &str) -> Standardized {
    let lower = text.to_lowercase();

    if let Some(ct) = ContentType::from_tag(&lower) {
        return Standardized::Tag(ct);
    }

    let mut synonyms: Vec<&(&str, ContentType)> = SYNONYMS.iter().collect();
    synonyms.sort_by_key(|(phrase, _)| Reverse(phrase.len()));
    match synonyms.iter().find(|(phrase, _)| lower.contains(phrase)) {
        Some((_, ct)) => Standardized::Tag(*ct),
        None => Standardized::Raw(lower),
    }
}

/// Extract the issue type a query complains about, or `None` ("unknown").
///
/// Direct tag containment first; then the secondary keyword groups in
/// declaration order (first group with any hit wins — no length sorting,
/// unlike content-type detection).
pub fn extract_issue(query: &str) -> Option<IssueType> {
    let lower = query.to_lowercase();

    if let Some(it) = IssueType::ALL.iter().find(|it| lower.contains(it.as_tag())) {
        return Some(*it);
    }

    ISSUE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(it, _)| *it)
}

/// Binary in-domain/off-topic classifier.
///
/// Decision order:
/// 1. any denylisted keyword → off-topic (denylist beats allowlist so that
///    "what is the weather for my shot" is still rejected);
/// 2. any in-domain term (every tag in the three enumerations plus the
///    brand/action extras) → on-topic;
/// 3. two or fewer whitespace tokens → on-topic (short ambiguous commands
///    are left for the later fallback stages);
/// 4. otherwise off-topic.
pub fn is_off_topic(query: &str) -> bool {
    let lower = query.to_lowercase();

    if OFF_TOPIC_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return true;
    }

    let on_topic = ContentType::ALL
        .iter()
        .map(|ct| ct.as_tag())
        .chain(IssueType::ALL.iter().map(|it| it.as_tag()))
        .chain(PlatformSection::ALL.iter().map(|ps| ps.as_tag()))
        .chain(ON_TOPIC_EXTRAS.iter().copied());
    if on_topic.into_iter().any(|term| lower.contains(term)) {
        return false;
    }

    if query.split_whitespace().count() <= 2 {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_match_wins_over_substring() {
        assert_eq!(
            detect_content_type("how to make an interactive snip"),
            Some(ContentType::InteractiveSnip)
        );
        assert_eq!(
            detect_content_type("editing a snip please"),
            Some(ContentType::EditingASnip)
        );
        // Bare "snip" still resolves to the short tag.
        assert_eq!(detect_content_type("snip"), Some(ContentType::Snip));
    }

    #[test]
    fn every_synonym_detects_its_canonical_tag() {
        for (phrase, expected) in SYNONYMS {
            let query = format!("please show me how to {phrase}");
            let got = detect_content_type(&query);
            assert!(got.is_some(), "no match for synonym {phrase:?}");
            // Phrases that embed a canonical tag verbatim ("edit shot"
            // contains "shot") resolve to that tag first by design; for all
            // others the synonym must win.
            let embeds_tag = ContentType::ALL
                .iter()
                .any(|ct| phrase.contains(ct.as_tag()));
            if !embeds_tag {
                assert_eq!(got, Some(*expected), "synonym {phrase:?} misroutes");
            }
        }
    }

    #[test]
    fn detect_returns_none_for_unrelated_text() {
        assert_eq!(detect_content_type("the quick brown fox"), None);
    }

    #[test]
    fn standardize_resolves_synonyms_and_passes_raw_through() {
        assert_eq!(
            standardize("make an interactive snip"),
            Standardized::Tag(ContentType::InteractiveSnip)
        );
        assert_eq!(standardize("FLIX"), Standardized::Tag(ContentType::Flix));
        assert_eq!(
            standardize("Quantum Chromodynamics"),
            Standardized::Raw("quantum chromodynamics".into())
        );
    }

    #[test]
    fn issue_direct_and_secondary_matching() {
        assert_eq!(extract_issue("my login is broken"), Some(IssueType::Login));
        assert_eq!(
            extract_issue("I can't log in, authentication failed"),
            Some(IssueType::Login)
        );
        assert_eq!(extract_issue("the sound is gone"), Some(IssueType::Audio));
        assert_eq!(extract_issue("my cat is stuck in a tree"), None);
    }

    // Declaration order, not length, decides secondary issue matches:
    // "settings" sits in the privacy group, which is declared before theme.
    #[test]
    fn issue_secondary_scan_is_declaration_ordered() {
        assert_eq!(
            extract_issue("something wrong in my settings display"),
            Some(IssueType::Privacy)
        );
    }

    #[test]
    fn off_topic_gate_decision_order() {
        // Denylist wins even when an allowlisted term is present.
        assert!(is_off_topic("what's the weather today"));
        assert!(is_off_topic("what is the weather for my shot"));
        // Allowlisted terms keep the query in-domain.
        assert!(!is_off_topic("how do I upload a shot"));
        // Short inputs get the benefit of the doubt.
        assert!(!is_off_topic("fix pls"));
        // Long queries with no platform terms are rejected.
        assert!(is_off_topic("please recommend me a good novel to bring on my trip"));
    }
}
