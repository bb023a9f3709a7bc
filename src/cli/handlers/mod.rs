mod init;
mod list;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use list::{handle_characters, handle_pictures};
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeParams, handle_serve};

use crate::config::AppConfig;
use crate::graphql::{McuSchema, build_schema};
use crate::storage::Catalog;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
}

impl CommandContext {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    pub fn schema(&self) -> McuSchema {
        build_schema(Arc::clone(&self.catalog), &self.config.limits)
    }
}
