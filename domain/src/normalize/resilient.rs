//! Three-tier JSON recovery for cleaned model output.

use super::literal::parse_literal;
use crate::util::preview;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Maximum number of raw-text bytes included in log lines.
const LOG_PREVIEW_BYTES: usize = 200;

/// Which recovery tier produced a parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTier {
    /// Text was valid JSON as-is
    Strict,
    /// Valid after removing trailing commas
    TrailingCommas,
    /// Accepted by the permissive literal parser
    Literal,
}

impl fmt::Display for ParseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTier::Strict => write!(f, "strict"),
            ParseTier::TrailingCommas => write!(f, "trailing_commas"),
            ParseTier::Literal => write!(f, "literal"),
        }
    }
}

/// Outcome of [`parse_resilient`]. Never an error: failure is a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed { value: Value, tier: ParseTier },
    /// No tier could parse the text; carries the raw text for diagnostics
    Unparsed(String),
}

impl ParseOutcome {
    pub fn value(&self) -> Option<&Value> {
        match self {
            ParseOutcome::Parsed { value, .. } => Some(value),
            ParseOutcome::Unparsed(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            ParseOutcome::Parsed { value, .. } => Some(value),
            ParseOutcome::Unparsed(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed { .. })
    }
}

/// Remove commas that directly precede a closing `}` or `]`.
///
/// Commas inside double-quoted strings are left alone.
pub fn remove_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if c == ',' && closes_container(&text[i + 1..]) {
            continue;
        }
        out.push(c);
    }
    out
}

fn closes_container(rest: &str) -> bool {
    matches!(rest.trim_start().chars().next(), Some('}' | ']'))
}

/// Parse text into JSON, trying progressively more permissive tiers.
///
/// 1. strict `serde_json`
/// 2. strict `serde_json` after [`remove_trailing_commas`]
/// 3. [`parse_literal`] for single quotes, Python keywords and tuples
///
/// Each tier runs only if the previous one failed.
pub fn parse_resilient(text: &str) -> ParseOutcome {
    let strict_error = match serde_json::from_str::<Value>(text) {
        Ok(value) => {
            return ParseOutcome::Parsed {
                value,
                tier: ParseTier::Strict,
            };
        }
        Err(e) => e,
    };
    debug!(error = %strict_error, "Strict JSON parse failed, removing trailing commas");

    let repaired = remove_trailing_commas(text);
    if repaired != text {
        match serde_json::from_str::<Value>(&repaired) {
            Ok(value) => {
                return ParseOutcome::Parsed {
                    value,
                    tier: ParseTier::TrailingCommas,
                };
            }
            Err(e) => debug!(error = %e, "Parse after trailing comma removal failed"),
        }
    }

    match parse_literal(text) {
        Ok(value) => ParseOutcome::Parsed {
            value,
            tier: ParseTier::Literal,
        },
        Err(literal_error) => {
            warn!(
                json_error = %strict_error,
                literal_error = %literal_error,
                preview = %preview(text, LOG_PREVIEW_BYTES),
                "Model output could not be parsed"
            );
            ParseOutcome::Unparsed(text.to_string())
        }
    }
}
