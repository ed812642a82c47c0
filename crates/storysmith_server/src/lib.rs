//! HTTP surface for Storysmith.
//!
//! [`StoryService`] runs the pipeline; [`create_router`] exposes it over
//! axum with failures mapped to distinct status codes by [`ApiError`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storysmith_models::{ClientConfig, OpenAiClient};
//! use storysmith_server::{ApiState, StoryService, create_router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::new(ClientConfig::from_env()?);
//!     let app = create_router(ApiState::new(StoryService::new(Arc::new(client))));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod error;
mod service;

pub use api::{ApiState, create_router, serve};
pub use error::{ApiError, ErrorBody};
pub use service::StoryService;
