//! # mcu-graph - A GraphQL API over the Marvel Cinematic Universe
//!
//! Serves a small, read-only catalog of movies, TV shows and characters over
//! GraphQL. Two root queries (`characters`, `pictures`) expose the catalog,
//! and relationships are traversable both ways: a picture lists its cast and
//! a character lists the pictures it appears in.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on port 3000 (GraphiQL on GET /graphql)
//! mcu-graph serve
//!
//! # Run a query without a server
//! mcu-graph query '{ characters { name pictures { title } } }'
//!
//! # Print the schema
//! mcu-graph schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Character, Picture, Movie, TvShow, ...)
//! - [`storage`]: The in-memory catalog and its lookups

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `mcu-graph.yml` files and their defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `McuError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Data models for the catalog.
pub mod model;

/// In-memory storage layer.
///
/// Holds the catalog tables, built once at startup.
pub mod storage;
