use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use repo_viewer::config::{Config, ConfigStore};
use repo_viewer::logging::init_tracing;
use repo_viewer::model::{FixtureSource, GithubSource, Period, RepoModel, RepoStore};
use repo_viewer::ui::runtime;

/// Browse trending repositories in the terminal.
#[derive(Parser)]
#[command(name = "repo-viewer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Creation period to start with (day, month or year).
    #[arg(short, long, value_parser = parse_period)]
    period: Option<Period>,

    /// Initial search text.
    #[arg(short, long)]
    query: Option<String>,

    /// Use built-in sample data instead of the network.
    #[arg(long)]
    offline: bool,
}

fn parse_period(value: &str) -> Result<Period, String> {
    Period::parse(value).ok_or_else(|| format!("unknown period '{value}' (expected day, month or year)"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(log_path) = init_tracing() {
        tracing::info!(path = %log_path.display(), "Logging to file");
    }

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let store = ConfigStore::new(config, config_path);
    let settings = store.get();
    let period = cli.period.unwrap_or(settings.ui.default_period);

    let io_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("repo-viewer-io")
        .build()
        .context("Failed to start async runtime")?;

    let model: Arc<dyn RepoModel> = if cli.offline {
        tracing::info!("Offline mode: using sample data");
        Arc::new(RepoStore::new(FixtureSource::sample(), io_runtime.handle().clone(), period))
    } else {
        let source = GithubSource::new(&settings.github).context("Failed to build HTTP client")?;
        Arc::new(RepoStore::new(source, io_runtime.handle().clone(), period))
    };

    runtime::run(model, &store, cli.query)?;
    io_runtime.shutdown_background();
    Ok(())
}
