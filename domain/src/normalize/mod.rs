//! Normalization of raw model text into JSON values.
//!
//! Models return JSON wrapped in fences, surrounded by commentary, with
//! trailing commas, or in a Python-like literal dialect. This module recovers
//! the payload in two steps:
//!
//! 1. [`clean_response`] strips wrappers and prose
//! 2. [`parse_resilient`] parses with three increasingly permissive tiers
//!
//! Neither step ever fails with an error; an unrecoverable payload comes back
//! as [`ParseOutcome::Unparsed`].

mod cleaner;
mod literal;
mod resilient;

pub use cleaner::clean_response;
pub use literal::parse_literal;
pub use resilient::{ParseOutcome, ParseTier, parse_resilient, remove_trailing_commas};
