use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vecto_core::catalog::CatalogLoader;
use vecto_core::clock::SystemClock;
use vecto_core::config::{BrowseConfig, ConfigLoad, ConfigLoader, ConfigOverrides};
use vecto_core::recency::{FileSessionStore, MemorySessionStore, RecencyEngine, SessionStore};
use vecto_model::AssetResolver;
use vecto_player::{App, Outcome};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "vecto-player")]
#[command(about = "Browse a Vecto catalog from the terminal")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "VECTO_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Catalog document: file path or http(s) URL (overrides config)
    #[arg(long)]
    catalog: Option<String>,

    /// Items shown at once in the trending row (overrides config)
    #[arg(long)]
    visible_items: Option<usize>,

    /// Simulated window width in pixels (overrides config)
    #[arg(long)]
    viewport_width: Option<u32>,

    /// Root directory for session storage (overrides config)
    #[arg(long)]
    session_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = ConfigLoader::new().with_overrides(ConfigOverrides {
        catalog_source: cli.catalog,
        visible_items: cli.visible_items,
        viewport_width: cli.viewport_width,
        session_dir: cli.session_dir,
    });
    if let Some(path) = cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = cli.env_file {
        loader = loader.with_env_file(path);
    }
    let ConfigLoad {
        config,
        config_path,
        env_file_loaded,
    } = loader.load().context("failed to load configuration")?;

    if env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config_path {
        info!(path = %path.display(), "using configuration file");
    }

    run(config).await
}

async fn run(config: BrowseConfig) -> anyhow::Result<()> {
    let assets = AssetResolver::new(config.catalog.asset_base.clone());
    let loader = CatalogLoader::new(config.catalog.source(), assets.clone())
        .context("failed to build catalog client")?;
    let (catalog, fallback) = loader.load_or_fallback().await;
    if fallback {
        println!("catalog unavailable; showing built-in titles");
    }

    let recency = RecencyEngine::load(open_session_store(&config), Arc::new(SystemClock));
    let (mut app, mut channels) = App::new(&config, catalog, recency, &assets);

    println!("{}", app.render());
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match app.handle_line(&line) {
                    Outcome::Continue(output) => {
                        for text in output {
                            println!("{text}");
                        }
                    }
                    Outcome::Quit => break,
                }
            }
            Some(message) = channels.featured.recv() => {
                if let Some(text) = app.on_featured(message) {
                    println!("{text}");
                }
            }
            Some(message) = channels.shelf.recv() => {
                if let Some(text) = app.on_shelf(message) {
                    println!("{text}");
                }
            }
        }
    }

    info!("session closed");
    Ok(())
}

/// One storage directory per process run. Falls back to memory when the
/// directory cannot be created.
fn open_session_store(config: &BrowseConfig) -> Box<dyn SessionStore> {
    let opened = match &config.recency.session_dir {
        Some(root) => FileSessionStore::new_session(root),
        None => FileSessionStore::temporary(),
    };
    match opened {
        Ok(store) => {
            info!(
                session = %store.session_id(),
                dir = %store.dir().display(),
                "session storage ready"
            );
            Box::new(store)
        }
        Err(err) => {
            warn!(error = %err, "session storage unavailable; history will not persist");
            Box::new(MemorySessionStore::new())
        }
    }
}
