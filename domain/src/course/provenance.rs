//! Provenance tagging for generated content.
//!
//! Every result leaving the pipeline says whether it came from the model or
//! from the deterministic fallback, so callers never have to inspect text to
//! find out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the pipeline fell back to placeholder content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No usable model output (connection errors, timeouts, bad status, cancellation)
    TransportFailure,
    /// Model output could not be parsed by any tier
    Unparsed,
    /// Model output parsed but had the wrong shape
    SchemaViolation,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::TransportFailure => write!(f, "transport failure"),
            FallbackReason::Unparsed => write!(f, "unparseable response"),
            FallbackReason::SchemaViolation => write!(f, "schema violation"),
        }
    }
}

/// Where a piece of content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Provenance {
    /// Validated model output, passed through unchanged
    Model,
    /// Deterministic placeholder content
    Fallback { reason: FallbackReason },
}

/// A result tagged with its [`Provenance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generated<T> {
    pub content: T,
    pub provenance: Provenance,
}

impl<T> Generated<T> {
    pub fn from_model(content: T) -> Self {
        Self {
            content,
            provenance: Provenance::Model,
        }
    }

    pub fn fallback(content: T, reason: FallbackReason) -> Self {
        Self {
            content,
            provenance: Provenance::Fallback { reason },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.provenance, Provenance::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self.provenance {
            Provenance::Fallback { reason } => Some(reason),
            Provenance::Model => None,
        }
    }

    pub fn into_content(self) -> T {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_provenance() {
        let generated = Generated::from_model(42);
        assert!(!generated.is_fallback());
        assert_eq!(generated.fallback_reason(), None);
        assert_eq!(generated.into_content(), 42);
    }

    #[test]
    fn test_fallback_provenance() {
        let generated = Generated::fallback("x", FallbackReason::Unparsed);
        assert!(generated.is_fallback());
        assert_eq!(generated.fallback_reason(), Some(FallbackReason::Unparsed));
    }

    #[test]
    fn test_provenance_serialization() {
        let json = serde_json::to_value(Provenance::Fallback {
            reason: FallbackReason::SchemaViolation,
        })
        .unwrap();
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["reason"], "schema_violation");

        let json = serde_json::to_value(Provenance::Model).unwrap();
        assert_eq!(json["source"], "model");
    }
}
