//! desk - terminal helpdesk client entry point.

use assist::AssistClient;
use clap::Parser;
use desk::config::{loader, ConfigLoader};
use desk::{tui, Result};
use desk_core::seed;
use std::path::PathBuf;
use tracing::{debug, info, warn, Level};

/// Terminal helpdesk client with AI-assisted triage
#[derive(Parser, Debug)]
#[command(name = "desk")]
#[command(version)]
#[command(about = "Terminal helpdesk client with AI-assisted triage", long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Explicit config file (skips the user/project lookup)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the assist model
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => loader::load_file(path).await?,
        None => ConfigLoader::new().load().await?,
    };
    if let Some(model) = args.model {
        config.assist.model = model;
    }
    debug!(model = %config.assist.model, "Configuration loaded");

    let assist_config = config.assist_config();
    if assist_config.has_credential() {
        info!("AI assist enabled via {}", config.assist.api_key_env);
    } else {
        warn!(
            "{} not set; AI features will use deterministic fallbacks",
            config.assist.api_key_env
        );
    }
    let assist = AssistClient::new(assist_config);

    // No persistence layer: every run starts from the demo snapshot.
    let store = seed::demo_store();
    info!(
        tickets = store.tickets().len(),
        users = store.users().len(),
        "Store seeded"
    );

    tui::run(store, assist, config.ui).await
}
