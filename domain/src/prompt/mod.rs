//! Prompt domain
//!
//! Deterministic instruction text sent to the model for each generation kind.

mod template;

pub use template::PromptTemplate;
