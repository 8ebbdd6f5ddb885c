//! Text completion providers
//!
//! - [`gemini::GeminiProvider`] — Google Gemini REST API
//! - [`offline::OfflineProvider`] — always unavailable; forces fallback content

pub mod gemini;
pub mod offline;
