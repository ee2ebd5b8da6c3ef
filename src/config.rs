use std::path::PathBuf;

use crate::error::{Result, ScribeError};

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_XAI_API: &str = "https://api.x.ai";
pub const DEFAULT_POSTS_DIR: &str = "source/_posts";

/// Everything a run needs, read once from the environment at startup and
/// passed by reference to every collaborator. Nothing reads ambient state
/// after this point.
#[derive(Debug, Clone)]
pub struct Config {
  /// Target repository in `owner/name` form.
  pub repo: String,
  /// Number of the issue to process.
  pub issue: u64,
  pub github_token: String,
  pub xai_token: String,
  /// Issue tracker API base. Overridable via `GITHUB_API_URL`.
  pub github_api: String,
  /// Completion service API base. Overridable via `XAI_API_URL`.
  pub xai_api: String,
  /// Directory the article file is written under.
  pub posts_dir: PathBuf,
}

impl Config {
  /// Reads the required variables (`REPO`, `ISSUE`, `GITHUB_TOKEN`,
  /// `XAI_TOKEN`); missing any one is fatal. The API bases default to the
  /// public endpoints.
  pub fn from_env() -> Result<Self> {
    let repo = required("REPO")?;
    let issue = required("ISSUE")?
      .parse::<u64>()
      .map_err(|e| ScribeError::Config(format!("ISSUE must be an issue number: {e}")))?;

    let config = Self {
      repo,
      issue,
      github_token: required("GITHUB_TOKEN")?,
      xai_token: required("XAI_TOKEN")?,
      github_api: std::env::var("GITHUB_API_URL")
        .unwrap_or_else(|_| DEFAULT_GITHUB_API.to_string()),
      xai_api: std::env::var("XAI_API_URL").unwrap_or_else(|_| DEFAULT_XAI_API.to_string()),
      posts_dir: PathBuf::from(DEFAULT_POSTS_DIR),
    };
    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> Result<()> {
    if !self.repo.contains('/') {
      return Err(ScribeError::Config(format!(
        "REPO must be in owner/name format: {}",
        self.repo
      )));
    }
    if self.issue == 0 {
      return Err(ScribeError::Config("ISSUE must be a positive issue number".into()));
    }
    Ok(())
  }
}

fn required(name: &str) -> Result<String> {
  std::env::var(name).map_err(|_| ScribeError::Config(format!("{name} not set")))
}
