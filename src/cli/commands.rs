use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcu-graph")]
#[command(
    author,
    version,
    about = "A GraphQL API over Marvel movies, TV shows and their characters"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for mcu-graph.yml by default)
    #[arg(long, global = true, env = "MCU_GRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default mcu-graph.yml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long, env = "MCU_GRAPH_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "MCU_GRAPH_PORT")]
        port: Option<u16>,

        /// Disable the GraphiQL page on GET /graphql
        #[arg(long)]
        no_playground: bool,
    },

    /// Execute a GraphQL query against the built-in catalog
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,

    /// List all characters
    Characters {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all movies and TV shows
    Pictures {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
