mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use page::MemoryPage;
use serde::Serialize;
use toolkit::{Dispatcher, Registry, ToolCall, ToolHost, ToolOutcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::{Error, Result};

const CONFIG_FILE: &str = "pagetool.toml";
const LOG_ENV: &str = "PAGETOOL_LOG";

#[derive(Parser)]
#[command(name = "pagetool")]
#[command(about = "Invoke browser page tools by name", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./pagetool.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON document fixture to load as the page
    #[arg(short, long, global = true)]
    page: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every tool declaration as JSON
    Tools,
    /// Invoke a tool with a raw JSON argument string
    Call {
        /// Tool name
        name: String,
        /// Raw JSON arguments
        #[arg(default_value = "{}")]
        args: String,
        /// Call id echoed in the result (random when omitted)
        #[arg(long)]
        id: Option<String>,
        /// Print the page document after the call
        #[arg(long)]
        show_page: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.log.level);

    let page = match &cli.page {
        Some(path) => load_page(path)?,
        None => MemoryPage::default(),
    };
    let registry = Registry::builtin(&config.resolver())?;
    let dispatcher = Dispatcher::with_policy(registry, page, config.policy);

    match cli.command {
        Commands::Tools => cmd_tools(&dispatcher),
        Commands::Call {
            name,
            args,
            id,
            show_page,
        } => cmd_call(&dispatcher, name, args, id, show_page).await,
    }
}

fn cmd_tools(dispatcher: &Dispatcher<MemoryPage>) -> Result<()> {
    print_json(&dispatcher.specs())
}

async fn cmd_call(
    dispatcher: &Dispatcher<MemoryPage>,
    name: String,
    args: String,
    id: Option<String>,
    show_page: bool,
) -> Result<()> {
    let mut call = ToolCall::new(name, args);
    if let Some(id) = id {
        call = call.with_id(id);
    }
    debug!(id = %call.id, name = %call.name, "dispatching");

    let result = dispatcher.run(&call).await;
    print_json(&result)?;

    if show_page {
        print_json(&dispatcher.page().snapshot().await)?;
    }

    match result.outcome {
        ToolOutcome::Success { .. } => Ok(()),
        ToolOutcome::Error { error } => Err(Error::Tool(error)),
    }
}

/// Explicit path must exist; the default file is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None if Path::new(CONFIG_FILE).exists() => Ok(Config::load(CONFIG_FILE)?),
        None => Ok(Config::default()),
    }
}

fn load_page(path: &Path) -> Result<MemoryPage> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::Fixture {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(MemoryPage::from_json(&json)?)
}

fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
