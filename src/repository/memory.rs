//! In-process repository.

use super::{Repository, RepositoryError};
use crate::domain::{Entity, EntityKind};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::debug;

/// Repository holding entities in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    entities: RwLock<HashMap<EntityKind, BTreeMap<String, Entity>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored entities across all kinds.
    pub async fn len(&self) -> usize {
        self.entities.read().await.values().map(BTreeMap::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn save(&self, entity: Entity) -> Result<(), RepositoryError> {
        let kind = entity.kind();
        let key = entity.key().to_string();
        debug!(%kind, key = %key, "Saving entity");

        self.entities
            .write()
            .await
            .entry(kind)
            .or_default()
            .insert(key, entity);
        Ok(())
    }

    async fn get(&self, kind: EntityKind, key: &str) -> Result<Option<Entity>, RepositoryError> {
        Ok(self
            .entities
            .read()
            .await
            .get(&kind)
            .and_then(|by_key| by_key.get(key))
            .cloned())
    }

    async fn get_all(&self, kind: EntityKind) -> Result<Vec<Entity>, RepositoryError> {
        Ok(self
            .entities
            .read()
            .await
            .get(&kind)
            .map(|by_key| by_key.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, kind: EntityKind, key: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .entities
            .write()
            .await
            .get_mut(&kind)
            .and_then(|by_key| by_key.remove(key))
            .is_some())
    }
}
