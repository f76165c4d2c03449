//! Command-line front for the ideawall data layer.

use anyhow::Context;
use clap::{Parser, Subcommand};
use ideawall_archive::ArchiveClient;
use ideawall_catalog::PartsCatalog;
use ideawall_config::IdeawallConfig;
use log::info;
use std::path::PathBuf;

/// Command-line options for the kiosk data tool.
#[derive(Parser)]
#[command(name = "ideawall", version)]
struct Cli {
    /// Path to an ideawall.json5 config file
    #[arg(long, default_value = "ideawall.json5")]
    config: PathBuf,
    /// Archive base URL, overriding the config
    #[arg(long)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print every archived conversation, newest first
    Fetch,
    /// Print the most recent conversation
    Latest,
    /// Print a page of conversations older than the latest
    History {
        /// Page size, overriding the config
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the parts catalog
    Parts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ideawall::init_logging();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(
        "starting (base_url={}, command set)",
        config.archive.base_url
    );

    match cli.command {
        Command::Fetch => {
            let client = ArchiveClient::new(config.archive.base_url);
            let outcome = client.fetch_all().await;
            if let Some(error) = outcome.error {
                eprintln!("error: {error}");
            }
            println!("{}", serde_json::to_string_pretty(&outcome.records)?);
        }
        Command::Latest => {
            let client = ArchiveClient::new(config.archive.base_url);
            match client.latest().await {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("no conversations yet"),
            }
        }
        Command::History { limit } => {
            let client = ArchiveClient::new(config.archive.base_url);
            let limit = limit.unwrap_or(config.archive.previous_limit);
            let page = client.previous(limit).await;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Parts => {
            let path = config
                .catalog
                .path
                .context("catalog.path is not configured")?;
            let catalog = PartsCatalog::load_from_path(&path)
                .with_context(|| format!("failed to load catalog from {path}"))?;
            println!("{}", serde_json::to_string_pretty(catalog.parts())?);
        }
    }

    Ok(())
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<IdeawallConfig> {
    let mut config = if cli.config.exists() {
        IdeawallConfig::load_from_path(&cli.config).with_context(|| {
            format!("failed to load config from {}", cli.config.display())
        })?
    } else if cli.base_url.is_some() {
        // No file needed when the archive URL comes from the flag.
        IdeawallConfig::default()
    } else {
        anyhow::bail!(
            "config file {} not found and no --base-url given",
            cli.config.display()
        );
    };
    if let Some(base_url) = cli.base_url.clone() {
        config.archive.base_url = base_url;
    }
    config.validate().context("invalid effective config")?;
    Ok(config)
}
