//! Completion-service clients for Playtime.
//!
//! Only Google's Gemini `generateContent` REST endpoint is supported. The
//! client implements [`CompletionDriver`](playtime_interface::CompletionDriver),
//! so the lookup pipeline never sees HTTP types.
//!
//! # Example
//!
//! ```no_run
//! use playtime_core::ResponseMode;
//! use playtime_interface::CompletionDriver;
//! use playtime_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env(
//!     playtime_models::DEFAULT_MODEL,
//!     playtime_models::DEFAULT_BASE_URL,
//!     playtime_models::DEFAULT_TIMEOUT,
//! )?;
//! let raw = client.complete("Say 30h", ResponseMode::PlainText).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    API_KEY_ENV, Candidate, Content, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT,
    GeminiClient, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
