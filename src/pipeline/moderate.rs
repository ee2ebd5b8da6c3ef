use tracing::info;

use crate::error::Result;
use crate::github::GitHubClient;

pub const OFF_TOPIC_LABEL: &str = "off-topic";

/// Labels the issue off-topic, then closes it. The two mutations are
/// independent; a failure after labeling leaves the issue labeled but open.
pub async fn close_off_topic(github: &GitHubClient, number: u64) -> Result<()> {
  info!("issue is off-topic, labeling and closing");
  github.label_issue(number, &[OFF_TOPIC_LABEL]).await?;
  github.close_issue(number).await?;
  Ok(())
}
