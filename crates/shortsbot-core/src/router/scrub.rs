//! Response scrubbing for the generative fallback.
//!
//! Local instruct models occasionally leak agent-framework markers
//! ("Thought:", "Code:", tool-call transcripts) into their completions.
//! Users must never see that scaffolding, so every raw completion passes
//! through here before it reaches the wire.

use regex::Regex;

const EMPTY_AFTER_SCRUB: &str = "I can help you with Bigshorts platform features. What would you like to know about SHOT, SNIP, SSUP, or Collab content?";

/// Compiled scrub patterns. Built once per router; `regex` compilation is
/// not free and the fallback path can be hot under load.
pub struct Scrubber {
    // Each marker pattern captures its terminating delimiter so the
    // replacement can put it back for the next pattern to consume.
    thought: Regex,
    code: Regex,
    end_code: Regex,
    observation: Regex,
    calling_tool: Regex,
    tool_result: Regex,
    blank_lines: Regex,
    assistant_label: Regex,
}

impl Scrubber {
    pub fn new() -> Self {
        // The patterns are literals; compilation cannot fail.
        Self {
            thought: Regex::new(r"(?s)Thoughts?:.*?(Code:|Observation:|\z)").unwrap(),
            code: Regex::new(r"(?s)Code:.*?(<end_code>|Observation:|\z)").unwrap(),
            end_code: Regex::new(r"<end_code>").unwrap(),
            observation: Regex::new(r"(?s)Observation:.*?(Thoughts?:|\z)").unwrap(),
            calling_tool: Regex::new(r"Calling tools?:[^\n]*").unwrap(),
            tool_result: Regex::new(r"Tool call results?:[^\n]*").unwrap(),
            blank_lines: Regex::new(r"\n\s*\n").unwrap(),
            assistant_label: Regex::new(r"Assistant:").unwrap(),
        }
    }

    /// Strip leaked reasoning markers and normalize whitespace. A completion
    /// that scrubs down to nothing is replaced with a canned redirect.
    pub fn clean(&self, raw: &str) -> String {
        let mut cleaned = raw.to_string();
        cleaned = self.thought.replace_all(&cleaned, "$1").into_owned();
        cleaned = self.code.replace_all(&cleaned, "$1").into_owned();
        cleaned = self.end_code.replace_all(&cleaned, "").into_owned();
        cleaned = self.observation.replace_all(&cleaned, "$1").into_owned();
        cleaned = self.calling_tool.replace_all(&cleaned, "").into_owned();
        cleaned = self.tool_result.replace_all(&cleaned, "").into_owned();

        if cleaned.trim().is_empty() {
            return EMPTY_AFTER_SCRUB.to_string();
        }

        cleaned = self.blank_lines.replace_all(&cleaned, "\n\n").into_owned();
        cleaned = self.assistant_label.replace_all(&cleaned, "").into_owned();
        cleaned.trim().to_string()
    }
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_reasoning_markers() {
        let s = Scrubber::new();
        let raw = "Thought: I should answer directly.\nCode: print('x')<end_code>Try posting a SNIP!";
        assert_eq!(s.clean(raw), "Try posting a SNIP!");
    }

    #[test]
    fn strips_tool_call_transcripts_line_by_line() {
        let s = Scrubber::new();
        let raw = "Calling tool: platform_guide\nTool call result: ok\nUse the Creation Wheel.";
        assert_eq!(s.clean(raw), "Use the Creation Wheel.");
    }

    #[test]
    fn fully_scrubbed_output_gets_canned_redirect() {
        let s = Scrubber::new();
        assert_eq!(s.clean("Thought: hmm"), EMPTY_AFTER_SCRUB);
        assert_eq!(s.clean("   "), EMPTY_AFTER_SCRUB);
    }

    #[test]
    fn normalizes_whitespace_and_labels() {
        let s = Scrubber::new();
        let raw = "Assistant: Here you go.\n\n   \n\nHave fun!";
        assert_eq!(s.clean(raw), "Here you go.\n\nHave fun!");
    }
}
