use async_trait::async_trait;
use core::option::Option;
use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::gateway::GatewayPublisherVia;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // append an entity, preserving insertion order
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // get the first entity matching the natural key
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete every entity matching the natural key, returns the count removed
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // filter by attribute predicate
    async fn query(&self, predicate: &HashMap::<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia  {
        match self {
            RepositoryStore::InMemory => {GatewayPublisherVia::Logs},
        }
    }
}
