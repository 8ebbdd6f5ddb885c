//! Response cleaning: strip fence markers and surrounding prose.

use serde::de::IgnoredAny;

const FENCE: &str = "```";

/// Clean raw model text down to the embedded JSON payload.
///
/// 1. Drops a leading fence marker (with any language hint on the same line)
///    and a trailing fence marker, independently of each other.
/// 2. Returns the text as-is (trimmed) if it is already valid JSON.
/// 3. Otherwise slices from the earliest `{`/`[` to the latest `}`/`]`.
///
/// If no delimiter span exists the trimmed text is returned and downstream
/// parsing is expected to reject it.
pub fn clean_response(raw: &str) -> String {
    let text = strip_fences(raw.trim());

    if serde_json::from_str::<IgnoredAny>(text).is_ok() {
        return text.to_string();
    }

    match json_span(text) {
        Some((start, end)) => text[start..=end].trim().to_string(),
        None => text.to_string(),
    }
}

fn strip_fences(text: &str) -> &str {
    let mut text = text;

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.find('\n') {
            // The rest of the opening line is a language hint unless it already holds the payload
            Some(newline) if !rest[..newline].contains(['{', '[']) => &rest[newline + 1..],
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        };
    }

    if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// Byte offsets of the earliest opening and latest closing delimiter.
fn json_span(text: &str) -> Option<(usize, usize)> {
    let start = text.find(['{', '['])?;
    let end = text.rfind(['}', ']'])?;
    (end > start).then_some((start, end))
}
