pub mod client;
pub mod issue;

pub use client::GitHubClient;
pub use issue::Issue;
