// Best-effort extraction of source code from a model response.

use regex::Regex;
use std::sync::OnceLock;

/// Language tags accepted on an opening fence. The tag set only affects
/// fence recognition, not which block is preferred: the first fence wins
/// regardless of its tag.
const FENCE_PATTERN: &str = r"(?s)```(?:tsx|typescript|ts|jsx|javascript|js|html)?[ \t]*\n?(.*?)```";

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FENCE_PATTERN).expect("fence pattern is valid"))
}

/// Pull source code out of a possibly noisy model response.
///
/// Takes the first fenced code block, stripped of its fence markers and
/// language tag and trimmed. A response with no fences is assumed to be
/// bare source and is returned trimmed. This is a heuristic, not a parser:
/// nothing here checks the result is syntactically valid, and unbalanced
/// fences yield whatever the first match yields.
pub fn extract_source(raw: &str) -> String {
    if let Some(captures) = fence_regex().captures(raw) {
        if let Some(body) = captures.get(1) {
            return body.as_str().trim().to_string();
        }
    }
    raw.trim().to_string()
}
