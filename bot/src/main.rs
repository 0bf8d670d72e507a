use std::sync::Arc;

use anyhow::{Context as _, Result};
use dexbot::{CommandEnv, Config, Context, Dispatcher, Reply, ReplySink, init_logging, registry};
use dexbot_stats::MemoryDataSource;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const DEFAULT_CONFIG: &str = "dexbot.toml";

/// Prints replies to the terminal
struct Stdout;

impl ReplySink for Stdout {
    fn send(&mut self, reply: Reply) -> Result<()> {
        println!("{}\n", reply);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let (config, missing) = match Config::load(&config_path) {
        Ok(config) => (config, false),
        Err(e) if e.is_not_found() => (Config::default(), true),
        Err(e) => return Err(e).with_context(|| format!("Failed to load {}", config_path)),
    };

    init_logging(&config.log_level);
    if missing {
        warn!(path = %config_path, "Config file not found, using defaults");
    }

    let source = MemoryDataSource::load(&config.pokedex_path, &config.stats_path)?;
    let env = CommandEnv::new(Arc::new(source), config.prefix.clone());
    let dispatcher = Dispatcher::new(config.prefix.clone(), registry(env));

    info!(
        prefix = %config.prefix,
        commands = dispatcher.registry().commands().len(),
        "dexbot ready"
    );
    println!("Type {}help for commands, Ctrl-D to quit.", config.prefix);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut sink = Stdout;
        let mut ctx = Context::new(&config.user, &mut sink);

        dispatcher.dispatch(&mut ctx, line.trim());
    }

    info!("Input closed, shutting down");
    Ok(())
}
