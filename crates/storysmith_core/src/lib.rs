//! Core data types and pure logic for Storysmith.
//!
//! This crate owns the contract with the model: the [`Story`] schema, the
//! prompt that asks for it, and the parser that holds replies to it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parse;
mod prompt;
mod request;
mod story;

pub use parse::parse_stories;
pub use prompt::{PROMPT_TEMPLATE, REQUIREMENTS_PLACEHOLDER, build_prompt};
pub use request::{RequirementRequest, StoryResponse};
pub use story::{Story, StoryBuilder, StoryBuilderError, TITLE_MIN_CHARS};
