//! Gemini `generateContent` integration.

mod client;
mod dto;

pub use client::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT, GeminiClient};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
