use tracing::{debug, info};

use crate::error::Result;
use crate::github::Issue;
use crate::grok::GrokClient;
use crate::prompts;

/// The answer text plus the title and tags derived from it.
#[derive(Debug, Clone)]
pub struct Answer {
  pub reply: String,
  pub title: String,
  pub tags: Vec<String>,
}

/// Runs the three completion calls for an on-topic issue: the answer
/// itself, then a title and tags derived from that answer.
pub async fn generate(grok: &GrokClient, issue: &Issue) -> Result<Answer> {
  info!("requesting answer for {issue}");
  let reply = grok
    .complete(
      &prompts::question(&issue.title, &issue.body),
      prompts::ANSWERER_SYSTEM,
    )
    .await?;
  debug!("answer:\n{reply}");

  let title = grok
    .complete(&prompts::title_request(&reply), prompts::TITLE_EDITOR_SYSTEM)
    .await?;
  info!("derived title: {title}");

  let raw_tags = grok
    .complete(&prompts::tags_request(&reply), prompts::TAG_EDITOR_SYSTEM)
    .await?;
  let tags = split_tags(&raw_tags);
  info!("derived tags: {tags:?}");

  Ok(Answer { reply, title, tags })
}

/// Splits the tag completion on single spaces and trims each token. Empty
/// tokens from doubled spaces are kept as-is.
pub fn split_tags(reply: &str) -> Vec<String> {
  reply.split(' ').map(|tag| tag.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_split_tags_on_single_spaces() {
    assert_eq!(split_tags("Nginx Linux"), vec!["Nginx", "Linux"]);
  }

  #[test]
  fn test_split_tags_keeps_empty_tokens_from_doubled_spaces() {
    assert_eq!(
      split_tags("Linux 网络安全  Python"),
      vec!["Linux", "网络安全", "", "Python"]
    );
  }

  #[test]
  fn test_split_tags_trims_surrounding_whitespace() {
    assert_eq!(split_tags("\nLinux Python\n"), vec!["Linux", "Python"]);
  }

  #[test]
  fn test_split_tags_keeps_duplicates() {
    assert_eq!(split_tags("Rust Rust"), vec!["Rust", "Rust"]);
  }
}
