//! The single-issue run, start to finish: fetch, classify, then either
//! moderate away or answer and publish.

pub mod answer;
pub mod classify;
pub mod moderate;
pub mod publish;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::grok::GrokClient;

/// How the run ended. Every path that returns this has already applied its
/// tracker mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
  /// The issue was labeled off-topic and closed without an answer.
  OffTopic,
  /// The issue was answered, closed, and archived to `article_path`.
  Answered { article_path: PathBuf },
}

pub async fn run(config: &Config) -> Result<RunOutcome> {
  let github = GitHubClient::new(config)?;
  let grok = GrokClient::new(config)?;

  let issue = github.fetch_issue(config.issue).await?;
  info!("issue title: {}", issue.title);
  debug!("issue body:\n{}", issue.body);

  if !classify::is_on_topic(&grok, &issue).await? {
    moderate::close_off_topic(&github, issue.number).await?;
    return Ok(RunOutcome::OffTopic);
  }

  let answer = answer::generate(&grok, &issue).await?;
  let article_path = publish::publish(&github, config, issue.number, &answer).await?;
  Ok(RunOutcome::Answered { article_path })
}
