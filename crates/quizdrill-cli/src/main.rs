//! quizdrill CLI — the user-facing command-line interface.
//!
//! The `play` command doubles as a transport adapter: it drives the same
//! engine operations the chat front ends do, under `platform = "cli"`.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "quizdrill", version, about = "Terminal trivia over a flat-file question corpus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StoreKind {
    /// Process-local store, nothing persists across runs
    Memory,
    /// Redis, as configured in quizdrill.toml
    Redis,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on stdin/stdout
    Play {
        /// Question corpus directory (overrides config)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Session store backend
        #[arg(long, value_enum, default_value = "memory")]
        store: StoreKind,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print one random question from the corpus
    Ask {
        /// Question corpus directory (overrides config)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example corpus
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdrill=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            corpus,
            store,
            config,
        } => commands::play::execute(corpus, store, config).await,
        Commands::Ask { corpus, config } => commands::ask::execute(corpus, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
