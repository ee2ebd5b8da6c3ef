use std::path::PathBuf;

use tracing::info;

use crate::article::Article;
use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::pipeline::answer::Answer;

pub const ANSWERED_LABEL: &str = "answered";

/// Publishes an answered issue: comment, rename, label and close, then the
/// article file. Steps run in order; nothing is rolled back on failure.
pub async fn publish(
  github: &GitHubClient,
  config: &Config,
  number: u64,
  answer: &Answer,
) -> Result<PathBuf> {
  github.add_comment(number, &answer.reply).await?;
  github.rename_issue(number, &answer.title).await?;
  github.label_issue(number, &[ANSWERED_LABEL]).await?;
  github.close_issue(number).await?;

  let article = Article::new(&answer.title, answer.tags.clone(), &answer.reply);
  let path = article.write(&config.posts_dir, number)?;
  info!("article written to {}", path.display());
  Ok(path)
}
