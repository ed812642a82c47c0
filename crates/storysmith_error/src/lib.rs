//! Error types for Storysmith.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Component errors lift into [`StorysmithError`] with `?`, which keeps the
//! kind available so the HTTP layer can pick a status code per failure.
//!
//! # Examples
//!
//! ```
//! use storysmith_error::{GenerationError, GenerationErrorKind, StorysmithResult};
//!
//! fn call() -> StorysmithResult<String> {
//!     Err(GenerationError::new(GenerationErrorKind::EmptyCompletion))?
//! }
//!
//! assert!(call().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod parse;
mod schema;
mod validation;

pub use config::ConfigError;
pub use error::{StorysmithError, StorysmithErrorKind, StorysmithResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use parse::{ParseError, ParseErrorKind};
pub use schema::{SchemaError, SchemaErrorKind};
pub use validation::ValidationError;
