use tracing::{error, info};

use issue_scribe::config::Config;
use issue_scribe::error::Result;
use issue_scribe::pipeline::{self, RunOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .with_writer(std::io::stderr)
    .init();

  if let Err(e) = run().await {
    error!("{e}");
    std::process::exit(1);
  }
}

async fn run() -> Result<()> {
  let config = Config::from_env()?;
  info!("processing {}#{}", config.repo, config.issue);

  match pipeline::run(&config).await? {
    RunOutcome::OffTopic => info!("{}#{} closed as off-topic", config.repo, config.issue),
    RunOutcome::Answered { article_path } => info!(
      "{}#{} answered, archived at {}",
      config.repo,
      config.issue,
      article_path.display()
    ),
  }
  Ok(())
}
