//! # newsgist
//!
//! A small web application that summarises news articles with an LLM.
//!
//! ## Flow
//!
//! - **Fetch**: download the article and join the text of its `<p>` elements
//! - **Summarise**: render the article into a prompt and send it to Gemini
//! - **Display**: show the summary (and optionally the article) in the page
//!
//! Both stages report failures through [`PipelineError`].

pub mod agent;
pub mod config;
pub mod logging;
pub mod page;
pub mod pipeline;
pub mod prompt;
pub mod scraper;
pub mod summary;
pub mod web;

pub use config::Config;
pub use pipeline::{Digest, Pipeline, PipelineError};
pub use summary::Summary;
