//! Prompt domain
//!
//! Templates for the stance, judge, synthesis and follow-up prompts.

mod template;

pub use template::{ANSWER_PREVIEW_CHARS, PromptTemplate};
