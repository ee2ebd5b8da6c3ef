use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ScribeError};
use crate::grok::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

pub const MODEL: &str = "grok-beta";

// The upstream service expects a browser user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.1 Safari/605.1.15";

pub struct GrokClient {
  client: Client,
  base: String,
  token: String,
}

impl GrokClient {
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(Self {
      client,
      base: config.xai_api.trim_end_matches('/').to_string(),
      token: config.xai_token.clone(),
    })
  }

  /// Sends one user message under the given system prompt and returns the
  /// first choice's content.
  pub async fn complete(&self, message: &str, system: &str) -> Result<String> {
    let request = ChatCompletionRequest {
      model: MODEL.to_string(),
      stream: false,
      messages: vec![ChatMessage::user(message), ChatMessage::system(system)],
    };
    debug!("completion request: {} bytes", message.len());

    let response = self
      .client
      .post(format!("{}/v1/chat/completions", self.base))
      .bearer_auth(&self.token)
      .json(&request)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".into());
      return Err(ScribeError::Completion { status, body });
    }

    let completion = response.json::<ChatCompletionResponse>().await?;
    let reply = completion
      .choices
      .into_iter()
      .next()
      .ok_or_else(|| ScribeError::MalformedCompletion("empty choices array".into()))?
      .message
      .content;
    debug!("completion reply: {} bytes", reply.len());
    Ok(reply)
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{body_json, body_partial_json, header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn test_config(base: &str) -> Config {
    Config {
      repo: "octo/forum".into(),
      issue: 42,
      github_token: "unused".into(),
      xai_token: "xai-secret".into(),
      github_api: "http://unused.invalid".into(),
      xai_api: base.into(),
      posts_dir: std::path::PathBuf::from("source/_posts"),
    }
  }

  #[tokio::test]
  async fn test_complete_returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .and(header("authorization", "Bearer xai-secret"))
      .and(header("user-agent", USER_AGENT))
      .and(body_partial_json(serde_json::json!({
        "model": "grok-beta",
        "stream": false
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [
          { "message": { "role": "assistant", "content": "第一条" } },
          { "message": { "role": "assistant", "content": "第二条" } }
        ]
      })))
      .expect(1)
      .mount(&server)
      .await;

    let client = GrokClient::new(&test_config(&server.uri())).unwrap();
    let reply = client.complete("你好", "规则").await.unwrap();
    assert_eq!(reply, "第一条");
  }

  #[tokio::test]
  async fn test_complete_sends_user_then_system_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .and(body_json(serde_json::json!({
        "model": "grok-beta",
        "stream": false,
        "messages": [
          { "role": "user", "content": "问题" },
          { "role": "system", "content": "规则" }
        ]
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": "好的" } }]
      })))
      .expect(1)
      .mount(&server)
      .await;

    let client = GrokClient::new(&test_config(&server.uri())).unwrap();
    client.complete("问题", "规则").await.unwrap();
  }

  #[tokio::test]
  async fn test_complete_surfaces_error_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
      .mount(&server)
      .await;

    let client = GrokClient::new(&test_config(&server.uri())).unwrap();
    let err = client.complete("你好", "规则").await.unwrap_err();
    assert!(matches!(err, ScribeError::Completion { .. }));
    let message = err.to_string();
    assert!(message.contains("429"));
    assert!(message.contains("rate limited"));
  }

  #[tokio::test]
  async fn test_complete_rejects_empty_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .respond_with(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
      )
      .mount(&server)
      .await;

    let client = GrokClient::new(&test_config(&server.uri())).unwrap();
    let err = client.complete("你好", "规则").await.unwrap_err();
    assert!(matches!(err, ScribeError::MalformedCompletion(_)));
  }
}
