//! Single-shot GitHub issue bot: classifies one issue as on- or off-topic
//! for a technical forum via a chat-completion service, answers on-topic
//! issues, and archives the answer as a blog post.

pub mod article;
pub mod config;
pub mod error;
pub mod github;
pub mod grok;
pub mod pipeline;
pub mod prompts;

pub use config::Config;
pub use error::{Result, ScribeError};
