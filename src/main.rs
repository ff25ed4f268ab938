use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use postboard::config::{Config, ConfigOverrides, ServiceKind};
use postboard::logging::init_tracing;
use postboard::service::{self, DEFAULT_POSTS_URL};
use postboard::shutdown::{spawn_signal_listener, ShutdownHandle};
use postboard::ui::app::App;
use postboard::ui::runtime;

/// Terminal viewer for a list of posts fetched from a JSON endpoint.
#[derive(Debug, Parser)]
#[command(name = "postboard", version)]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use the in-memory mock service instead of the network
    #[arg(long, conflicts_with = "url")]
    mock: bool,

    /// Load mock posts from a JSON file (implies --mock)
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    fixture: Option<PathBuf>,

    /// Fetch posts from this URL instead of the configured one
    #[arg(long, value_name = "URL")]
    url: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mock: self.mock,
            fixture: self.fixture.clone(),
            url: self.url.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?.with_overrides(cli.overrides())?;

    let log_path = config.log_path();
    init_tracing(&config.logging, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    tracing::info!(config = %config_path.display(), "Starting postboard");

    let data_service = service::from_config(&config.service)?;
    let shutdown = ShutdownHandle::new();
    spawn_signal_listener(shutdown.clone());

    let app = App::new(data_service, source_label(&config));
    runtime::run(app, shutdown).await?;

    tracing::info!("Exited cleanly");
    Ok(())
}

fn source_label(config: &Config) -> String {
    match config.service.kind {
        ServiceKind::Remote => config
            .service
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_POSTS_URL.to_string()),
        ServiceKind::Mock => match &config.service.fixture {
            Some(path) => format!("mock: {}", path.display()),
            None => "mock".to_string(),
        },
    }
}
