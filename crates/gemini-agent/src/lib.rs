//! `gemini-agent` — minimal Rust client for the Gemini REST API.
//!
//! Covers exactly one operation: `models/<model>:generateContent`, the
//! single-shot text completion used to turn a commit log into a changelog.
//!
//! ```text
//! prompt string
//!     │
//!     ▼
//! GeminiClient    ← POST /v1beta/models/<model>:generateContent
//!     │              header x-goog-api-key, JSON body
//!     ▼
//! GenerateContentResponse  ← typed candidates/parts, no Value escape hatches
//!     │
//!     ▼
//! completion text (first candidate's text parts, concatenated)
//! ```
//!
//! No retries, no streaming, no request chunking. The caller issues one
//! request per run and treats every failure as terminal.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::GeminiError;
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, GeminiError>;
