//! Progress notification port
//!
//! Defines the interface for reporting progress while content is generated.

use super::completion_provider::ProviderError;
use coursegen_domain::{FallbackReason, GenerationKind};
use std::fmt;

/// Stages of one generation call, in order.
///
/// `Success` and `Fallback` are terminal; both end the call without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    BuildingPrompt,
    Calling,
    Cleaning,
    Parsing,
    Validating,
    Success,
    Fallback,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::BuildingPrompt => "building_prompt",
            PipelineStage::Calling => "calling",
            PipelineStage::Cleaning => "cleaning",
            PipelineStage::Parsing => "parsing",
            PipelineStage::Validating => "validating",
            PipelineStage::Success => "success",
            PipelineStage::Fallback => "fallback",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Success | PipelineStage::Fallback)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates during generation
///
/// Implementations live in the presentation layer. All methods have no-op
/// defaults. Course generation runs quizzes concurrently, so calls for
/// different topics may interleave.
pub trait GenerationProgress: Send + Sync {
    /// Called when a roadmap or quiz generation starts; `label` is the subject or topic
    fn on_generation_start(&self, _kind: GenerationKind, _label: &str) {}

    /// Called on every stage transition
    fn on_stage(&self, _kind: GenerationKind, _stage: PipelineStage) {}

    /// Called when a provider attempt fails and may be retried
    fn on_attempt_failed(&self, _attempt: u32, _max_attempts: u32, _error: &ProviderError) {}

    /// Called once per generation; `fallback` is `Some` when placeholder content was used
    fn on_generation_complete(&self, _kind: GenerationKind, _fallback: Option<FallbackReason>) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {}
