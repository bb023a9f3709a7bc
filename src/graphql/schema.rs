use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::config::LimitSettings;
use crate::storage::Catalog;

use super::types::*;

pub type McuSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(catalog: Arc<Catalog>, limits: &LimitSettings) -> McuSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(catalog)
        .limit_depth(limits.max_depth)
        .limit_complexity(limits.max_complexity)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All characters, in table order
    async fn characters(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Character>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog
            .characters()
            .iter()
            .cloned()
            .map(Character::from)
            .collect())
    }

    /// All movies followed by all TV shows
    async fn pictures(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Picture>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog
            .pictures()
            .iter()
            .cloned()
            .map(Picture::from)
            .collect())
    }
}
