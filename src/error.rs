use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ScribeError {
  #[error("config error: {0}")]
  Config(String),

  #[error("github api error: {status}: {body}")]
  GitHub { status: StatusCode, body: String },

  #[error("completion api error: {status}: {body}")]
  Completion { status: StatusCode, body: String },

  #[error("completion response malformed: {0}")]
  MalformedCompletion(String),

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScribeError>;
