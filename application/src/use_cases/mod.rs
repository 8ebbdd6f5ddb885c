//! Use cases
//!
//! - [`retrying_transport`] — bounded, cancellable provider calls
//! - [`ai_service`] — the generation pipeline and its fallback path

pub mod ai_service;
pub mod retrying_transport;
