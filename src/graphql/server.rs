//! GraphQL HTTP server.

use std::future::Future;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tokio::signal;
use tracing::{debug, info};

use crate::config::ServerSettings;

use super::schema::McuSchema;

/// Build the HTTP routes: `POST /graphql`, `GET /graphql` (GraphiQL, when
/// enabled) and `GET /health`.
pub fn router(schema: McuSchema, playground: bool) -> Router {
    let graphql = if playground {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/graphql", graphql)
        .route("/health", get(health_check))
        .with_state(schema)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn run_server(schema: McuSchema, settings: &ServerSettings) -> std::io::Result<()> {
    serve_with_shutdown(schema, settings, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(
    schema: McuSchema,
    settings: &ServerSettings,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(schema, settings.playground);

    let addr = settings.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(addr = %addr, playground = settings.playground, "GraphQL server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    debug!("Server stopped");
    Ok(())
}

async fn graphql_handler(State(schema): State<McuSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
