//! GraphQL schema, resolvers and HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! mcu-graph serve --port 3000
//!
//! # Execute a query from the CLI
//! mcu-graph query '{ pictures { title characters { name } } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `characters`, `pictures`
//! - **Types**: `Character`, `Picture` (interface), `Movie`, `TvShow`, `Season`, `Episode`
//! - **Scalars**: `Date` (ISO-8601, `YYYY-MM-DD`)
//!
//! Relationship fields (`Character.pictures`, `Movie.characters`,
//! `TvShow.characters`) are resolved on demand from the shared catalog.

mod schema;
mod server;
mod types;

pub use schema::{McuSchema, QueryRoot, build_schema};
pub use server::{router, run_server, serve_with_shutdown};
pub use types::*;
