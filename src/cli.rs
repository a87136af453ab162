use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "highlights-hub")]
#[command(author, version, about = "Sports highlights search server and CLI")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API (and static UI, if configured)
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Search for highlights from the command line
    Search {
        /// League or sport, e.g. NHL
        #[arg(short, long, default_value = "")]
        league: String,

        /// Team, player or other free text
        #[arg(short, long)]
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Query a running server instead of calling the provider directly
        #[arg(long)]
        server: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
