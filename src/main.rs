use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use mcu_graph::cli::handlers::{self, CommandContext, ServeParams};
use mcu_graph::cli::{Cli, Commands};
use mcu_graph::config::AppConfig;
use mcu_graph::logging;
use mcu_graph::storage::Catalog;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { force } => handlers::handle_init(force),
        Commands::Serve {
            host,
            port,
            no_playground,
        } => handlers::handle_serve(
            load_context(config_path)?,
            ServeParams {
                host,
                port,
                no_playground,
            },
        ),
        Commands::Query { query, variables } => {
            handlers::handle_query(load_context(config_path)?, query, variables)
        }
        Commands::Schema => handlers::handle_schema(load_context(config_path)?),
        Commands::Characters { json } => {
            handlers::handle_characters(&load_context(config_path)?, json)
        }
        Commands::Pictures { json } => handlers::handle_pictures(&load_context(config_path)?, json),
    }
}

fn load_context(config_path: Option<&Path>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(config_path, &cwd)
        .context("Failed to load mcu-graph configuration")?;
    let catalog = Catalog::builtin().context("Failed to build the built-in catalog")?;
    Ok(CommandContext::new(config, catalog))
}
