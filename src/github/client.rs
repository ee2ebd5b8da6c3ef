use reqwest::{Client, Response};
use serde_json::json;
use tracing::info;

use crate::config::Config;
use crate::error::{Result, ScribeError};
use crate::github::issue::{Issue, RawIssue};

const USER_AGENT: &str = concat!("issue-scribe/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
  client: Client,
  base: String,
  repo: String,
  token: String,
}

impl GitHubClient {
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(Self {
      client,
      base: config.github_api.trim_end_matches('/').to_string(),
      repo: config.repo.clone(),
      token: config.github_token.clone(),
    })
  }

  pub async fn fetch_issue(&self, number: u64) -> Result<Issue> {
    info!("fetching {}#{number}", self.repo);

    let response = self
      .client
      .get(self.issue_url(number))
      .bearer_auth(&self.token)
      .send()
      .await?;
    let raw = Self::check(response).await?.json::<RawIssue>().await?;
    Ok(raw.into())
  }

  pub async fn add_comment(&self, number: u64, body: &str) -> Result<()> {
    info!("commenting on {}#{number}", self.repo);

    let response = self
      .client
      .post(format!("{}/comments", self.issue_url(number)))
      .bearer_auth(&self.token)
      .json(&json!({ "body": body }))
      .send()
      .await?;
    Self::check(response).await?;
    Ok(())
  }

  pub async fn rename_issue(&self, number: u64, title: &str) -> Result<()> {
    info!("renaming {}#{number} to {title:?}", self.repo);
    self.patch_issue(number, json!({ "title": title })).await
  }

  /// Replaces the issue's whole label set with `labels`.
  pub async fn label_issue(&self, number: u64, labels: &[&str]) -> Result<()> {
    info!("labeling {}#{number} with {labels:?}", self.repo);
    self.patch_issue(number, json!({ "labels": labels })).await
  }

  pub async fn close_issue(&self, number: u64) -> Result<()> {
    info!("closing {}#{number}", self.repo);
    self.patch_issue(number, json!({ "state": "closed" })).await
  }

  async fn patch_issue(&self, number: u64, body: serde_json::Value) -> Result<()> {
    let response = self
      .client
      .patch(self.issue_url(number))
      .bearer_auth(&self.token)
      .json(&body)
      .send()
      .await?;
    Self::check(response).await?;
    Ok(())
  }

  fn issue_url(&self, number: u64) -> String {
    format!("{}/repos/{}/issues/{number}", self.base, self.repo)
  }

  async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }
    let body = response
      .text()
      .await
      .unwrap_or_else(|_| "<unreadable body>".into());
    Err(ScribeError::GitHub { status, body })
  }
}
