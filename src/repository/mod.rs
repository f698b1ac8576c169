//! Repository abstraction over persisted domain entities.

use crate::domain::{Entity, EntityKind};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

pub use memory::MemoryRepository;

/// Persistence access for domain entities.
///
/// Entities are addressed by `(kind, key)`; see [`Entity::key`].
#[async_trait]
pub trait Repository: Send + Sync {
    /// Store an entity, replacing any existing one with the same kind and key.
    async fn save(&self, entity: Entity) -> Result<(), RepositoryError>;

    async fn get(&self, kind: EntityKind, key: &str) -> Result<Option<Entity>, RepositoryError>;

    /// All entities of a kind, ordered by key.
    async fn get_all(&self, kind: EntityKind) -> Result<Vec<Entity>, RepositoryError>;

    /// Remove an entity. Returns whether it existed.
    async fn delete(&self, kind: EntityKind, key: &str) -> Result<bool, RepositoryError>;
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),
}
