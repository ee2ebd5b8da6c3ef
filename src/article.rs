use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;

/// A blog post with YAML front matter, rendered from an answered issue.
#[derive(Debug, Clone)]
pub struct Article {
  pub title: String,
  pub date: DateTime<Local>,
  pub tags: Vec<String>,
  pub content: String,
}

impl Article {
  pub fn new(title: &str, tags: Vec<String>, content: &str) -> Self {
    Self {
      title: title.to_string(),
      date: Local::now(),
      tags,
      content: content.to_string(),
    }
  }

  pub fn file_name(issue: u64) -> String {
    format!("issue-{issue}.md")
  }

  /// Front matter block followed by the content, with no trailing newline.
  pub fn render(&self) -> String {
    let tags = self
      .tags
      .iter()
      .map(|tag| format!("\"{tag}\""))
      .collect::<Vec<_>>()
      .join(", ");
    [
      "---".to_string(),
      format!("title: \"{}\"", self.title),
      format!("date: {}", self.date.format("%Y-%m-%dT%H:%M:%S%.6f")),
      format!("tags: [{tags}]"),
      "---".to_string(),
      self.content.clone(),
    ]
    .join("\n")
  }

  /// Writes the rendered article to `posts_dir/issue-{issue}.md`,
  /// overwriting any previous run's output.
  pub fn write(&self, posts_dir: &Path, issue: u64) -> Result<PathBuf> {
    std::fs::create_dir_all(posts_dir)?;
    let path = posts_dir.join(Self::file_name(issue));
    std::fs::write(&path, self.render())?;
    Ok(path)
  }
}
