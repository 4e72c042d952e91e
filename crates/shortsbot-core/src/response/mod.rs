//! Structured response types returned by the router.
//!
//! The wire shape is `{"type": "...", "content": ...}` — serde's adjacently
//! tagged representation. Every variant carries the discriminator; the
//! router never returns an untagged payload.

use serde::{Deserialize, Serialize};

use crate::taxonomy::ContentType;

/// The closed union of everything `process_query` can return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum BotResponse {
    /// Plain text reply.
    Message(String),
    /// Step-by-step creation guide.
    ContentGuide(GuideContent),
    /// Natural-language offer to show a guide; becomes the pending
    /// suggestion the affirmation resolver consults.
    Suggestion(String),
    /// Trending redirect buttons.
    SuggestionButtons(ButtonsContent),
    /// Canned solution for a known issue type.
    Issue(String),
    /// One random interactive-video idea.
    Idea(String),
    /// Platform-section explanation.
    Guide(String),
    /// Greeting plus the fixed FAQ list.
    GreetingWithFaqs(GreetingContent),
    /// Explanation of a content type with a yes/no guide prompt.
    ContentExplanationWithGuidePrompt(ExplanationContent),
    /// Generative reply augmented with trending suggestions.
    Combined(CombinedContent),
    /// Degraded outcome; always well-formed, never a stack trace.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideContent {
    pub title: String,
    pub steps: Vec<GuideStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideStep {
    /// 1-based index. The source data carries a duplicate index in one
    /// guide; that is an accepted quirk, not an error.
    pub step: u32,
    pub description: String,
    pub image_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonsContent {
    pub message: String,
    pub buttons: Vec<SuggestionButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionButton {
    pub text: String,
    pub action: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingContent {
    pub greeting: String,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub content_type: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationContent {
    pub explanation: String,
    pub content_type: ContentType,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedContent {
    pub message: String,
    pub trending: ButtonsContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_wire_shape() {
        let r = BotResponse::Message("hi".into());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "message");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn guide_wire_shape_skips_absent_tips() {
        let r = BotResponse::ContentGuide(GuideContent {
            title: "Creating a Bigshorts SNIP".into(),
            steps: vec![GuideStep {
                step: 1,
                description: "Open the app".into(),
                image_path: "images/Shot/Group 1444.png".into(),
                tips: None,
            }],
        });
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "content_guide");
        assert_eq!(json["content"]["steps"][0]["step"], 1);
        assert!(json["content"]["steps"][0].get("tips").is_none());
    }

    #[test]
    fn explanation_embeds_canonical_tag() {
        let r = BotResponse::ContentExplanationWithGuidePrompt(ExplanationContent {
            explanation: "SNIP is our short video format.".into(),
            content_type: ContentType::Snip,
            prompt: "Would you like to see the step-by-step guide for creating a SNIP?".into(),
        });
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "content_explanation_with_guide_prompt");
        assert_eq!(json["content"]["content_type"], "snip");
    }

    #[test]
    fn round_trip_all_simple_variants() {
        for r in [
            BotResponse::Suggestion("try a snip".into()),
            BotResponse::Issue("clear the cache".into()),
            BotResponse::Idea("add a button".into()),
            BotResponse::Guide("SNIP is our short video feature.".into()),
            BotResponse::Error("oops".into()),
        ] {
            let json = serde_json::to_string(&r).unwrap();
            let back: BotResponse = serde_json::from_str(&json).unwrap();
            assert_eq!(back, r);
        }
    }
}
