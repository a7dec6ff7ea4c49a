//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for llm-bridge-client
#[derive(Parser, Debug)]
#[command(name = "llm-bridge-client")]
#[command(author, version, about = "Demo client for the VS Code LLM Bridge HTTP API")]
#[command(long_about = r#"
Exercises the HTTP API exposed by the VS Code LLM Bridge extension.

Without arguments it runs a fixed demonstration against http://localhost:3000:
1. Health check (stops here if the bridge is not reachable)
2. Lists the first available language models
3. Sends one chat message and prints the answer
4. Starts an interactive chat (type 'quit', 'exit' or 'q' to leave)

Configuration files are loaded from (in priority order):
1. LLM_BRIDGE_<SECTION>__<KEY>   Environment variables
2. --config <path>               Explicit config file
3. ./bridge.toml                 Project-level config
4. ~/.config/llm-bridge-client/config.toml   Global config

Example:
  llm-bridge-client
  llm-bridge-client --base-url http://127.0.0.1:4000
  llm-bridge-client --docs
"#)]
pub struct Cli {
    /// Base URL of the bridge (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Only run the health check before the interactive chat
    #[arg(long)]
    pub skip_demo: bool,

    /// Print the bridge's API documentation as JSON and exit
    #[arg(long)]
    pub docs: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
