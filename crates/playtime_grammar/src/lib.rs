//! The lookup grammar: what we ask the model for, and how we read its answer.
//!
//! The prompt templates and the extraction rules are co-designed. Each
//! [`ResponseMode`](playtime_core::ResponseMode) has one template in
//! [`prompt`] and one extraction strategy in [`normalize`]; every strategy
//! funnels its candidate string through [`canonicalize`], so duration parsing
//! lives in exactly one place.
//!
//! # Example
//!
//! ```
//! use playtime_core::{RawCompletion, ResponseMode};
//! use playtime_grammar::{build, normalize};
//!
//! let prompt = build("Celeste", ResponseMode::LabeledLine);
//! assert!(prompt.contains("\"Celeste\""));
//!
//! let raw = RawCompletion::Text("Main: 8h, Extras: 13h 30m, 100%: 38h, All: 12h".into());
//! assert_eq!(normalize(&raw, ResponseMode::LabeledLine).to_string(), "13h 30m");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod canonical;
mod fence;
mod normalize;
mod prompt;

pub use canonical::canonicalize;
pub use normalize::{normalize, normalize_field};
pub use prompt::{PromptSpec, build};
