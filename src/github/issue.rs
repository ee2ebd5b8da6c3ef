use serde::Deserialize;

/// Title shown for issues filed without one.
pub const UNTITLED: &str = "无标题";

/// Issue fields as the tracker API returns them. Title and body are
/// nullable on the wire.
#[derive(Debug, Deserialize)]
pub struct RawIssue {
  pub number: u64,
  pub title: Option<String>,
  pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Issue {
  pub number: u64,
  pub title: String,
  pub body: String,
}

impl From<RawIssue> for Issue {
  fn from(raw: RawIssue) -> Self {
    // An empty title is treated the same as a missing one.
    let title = match raw.title {
      Some(t) if !t.is_empty() => t,
      _ => UNTITLED.to_string(),
    };
    Self {
      number: raw.number,
      title,
      body: raw.body.unwrap_or_default(),
    }
  }
}

impl Issue {
  /// Title and body combined into one block of text for the classifier.
  pub fn question_text(&self) -> String {
    format!("{}\n\n{}", self.title, self.body)
  }
}

impl std::fmt::Display for Issue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}: {}", self.number, self.title)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_raw_keeps_present_fields() {
    let issue: Issue = RawIssue {
      number: 7,
      title: Some("Nginx 反向代理".to_string()),
      body: Some("如何配置？".to_string()),
    }
    .into();
    assert_eq!(issue.title, "Nginx 反向代理");
    assert_eq!(issue.body, "如何配置？");
  }

  #[test]
  fn test_from_raw_fills_missing_title_and_body() {
    let issue: Issue = RawIssue {
      number: 7,
      title: None,
      body: None,
    }
    .into();
    assert_eq!(issue.title, UNTITLED);
    assert_eq!(issue.body, "");
  }

  #[test]
  fn test_from_raw_treats_empty_title_as_missing() {
    let issue: Issue = RawIssue {
      number: 7,
      title: Some(String::new()),
      body: Some("正文".to_string()),
    }
    .into();
    assert_eq!(issue.title, UNTITLED);
  }

  #[test]
  fn test_question_text_joins_title_and_body() {
    let issue = Issue {
      number: 7,
      title: "标题".to_string(),
      body: "正文".to_string(),
    };
    assert_eq!(issue.question_text(), "标题\n\n正文");
  }
}
