//! CLI entrypoint for llm-bridge-client
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use bridge_application::{BridgeApi, EndpointEnvelope, RunDemoUseCase};
use bridge_infrastructure::{ConfigLoader, FileConfig, HttpBridgeClient};
use bridge_presentation::{ChatRepl, Cli, ConsoleFormatter, DemoReporter};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration, then apply command-line overrides
    let mut config = load_config(&cli)?;
    apply_overrides(&mut config, &cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml().context("failed to render configuration")?);
        return Ok(());
    }

    config.validate()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let base_url = config.base_url()?;
    let bridge = Arc::new(HttpBridgeClient::new(&base_url));
    info!("Using bridge at {}", bridge.base_url());

    if cli.docs {
        let docs = bridge.get_docs().await;
        let envelope = EndpointEnvelope::from_result(&docs);
        let value = serde_json::to_value(&envelope).context("failed to encode docs")?;
        println!("{}", ConsoleFormatter::json(&value));
        return Ok(());
    }

    // Ctrl-C cancels whatever request is in flight
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Received Ctrl-C");
            signal_token.cancel();
        }
    });

    println!("{}", ConsoleFormatter::banner(&base_url));

    let demo = RunDemoUseCase::new(Arc::clone(&bridge))
        .with_params(config.demo_params())
        .with_cancellation(token.clone());
    let outcome = demo.execute_with_progress(&DemoReporter).await;
    debug!("Demonstration finished: {:?}", outcome);
    if !outcome.should_continue() {
        return Ok(());
    }

    let repl = ChatRepl::new(bridge)
        .with_params(config.chat_params())
        .with_cancellation(token)
        .with_progress(config.repl.show_progress)
        .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from));
    let exit = repl.run().await.context("failed to start line editor")?;
    debug!("Interactive chat ended: {:?}", exit);

    println!("{}", ConsoleFormatter::completed());

    Ok(())
}

fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.bridge.base_url = base_url.clone();
    }
    if cli.skip_demo {
        config.demo.health_only = true;
    }
    if cli.no_color {
        config.output.color = false;
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("failed to load configuration: {}", e))
}
