use tracing::info;

use crate::error::Result;
use crate::github::Issue;
use crate::grok::GrokClient;
use crate::prompts;

/// Asks the moderator persona whether the issue belongs on the forum.
pub async fn is_on_topic(grok: &GrokClient, issue: &Issue) -> Result<bool> {
  let reply = grok
    .complete(
      &prompts::classification_question(&issue.question_text()),
      prompts::MODERATOR_SYSTEM,
    )
    .await?;
  let on_topic = is_affirmative(&reply);
  info!("topic assessment: on_topic={on_topic} (reply: {})", reply.trim());
  Ok(on_topic)
}

/// Matching policy for the moderator's verdict: an upper-cased substring
/// search for `YES`. A hedged reply containing both tokens ("NO... YES")
/// therefore counts as affirmative.
pub fn is_affirmative(reply: &str) -> bool {
  reply.to_uppercase().contains("YES")
}
