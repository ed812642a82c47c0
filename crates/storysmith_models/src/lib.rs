//! Completion provider integrations for Storysmith.
//!
//! The pipeline only ever talks to a [`CompletionDriver`]. [`OpenAiClient`]
//! implements it for any OpenAI-compatible chat completion endpoint.
//!
//! # Example
//!
//! ```no_run
//! use storysmith_models::{ClientConfig, CompletionDriver, OpenAiClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new(ClientConfig::from_env()?);
//! let reply = client.complete("Return an empty JSON array.").await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod driver;
mod request;
mod response;

pub use client::OpenAiClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use driver::CompletionDriver;
pub use request::{ChatCompletionRequest, Message};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, Usage};
