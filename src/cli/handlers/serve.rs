use anyhow::{Context, Result};
use tracing::{error, info};

use crate::graphql::run_server;

use super::CommandContext;

pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_playground: bool,
}

pub fn handle_serve(ctx: CommandContext, params: ServeParams) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(host) = params.host {
        settings.host = host;
    }
    if let Some(port) = params.port {
        settings.port = port;
    }
    if params.no_playground {
        settings.playground = false;
    }

    let schema = ctx.schema();

    info!(
        characters = ctx.catalog.characters().len(),
        pictures = ctx.catalog.pictures().len(),
        "Catalog loaded"
    );
    if settings.playground {
        info!("GraphiQL: http://localhost:{}/graphql", settings.port);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    // startup failures are reported once, never retried
    runtime
        .block_on(run_server(schema, &settings))
        .inspect_err(|e| error!(error = %e, addr = %settings.address(), "Server error"))
        .with_context(|| format!("Failed to serve on {}", settings.address()))
}
