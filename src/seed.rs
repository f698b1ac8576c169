//! Populate a repository with fixed reference data at application start.

use crate::domain::Country;
use crate::repository::{Repository, RepositoryError};
use tracing::info;

/// The countries inserted by [`populate_db`].
pub fn seed_countries() -> Vec<Country> {
    vec![Country::new("Uruguay", "UY")]
}

/// Save every seed country through `repo`, once each and in order.
///
/// The first failing save aborts the run. Returns the number of saved items.
pub async fn populate_db<R>(repo: &R) -> Result<usize, RepositoryError>
where
    R: Repository + ?Sized,
{
    let countries = seed_countries();
    let count = countries.len();

    for country in countries {
        repo.save(country.into()).await?;
    }

    info!("Memory DB populated");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entity, EntityKind};
    use crate::repository::MemoryRepository;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every save; optionally fails them all.
    #[derive(Default)]
    struct RecordingRepository {
        saved: Mutex<Vec<Entity>>,
        fail: bool,
    }

    #[async_trait]
    impl Repository for RecordingRepository {
        async fn save(&self, entity: Entity) -> Result<(), RepositoryError> {
            self.saved.lock().unwrap().push(entity);
            if self.fail {
                return Err(RepositoryError::Storage("disk full".to_string()));
            }
            Ok(())
        }

        async fn get(
            &self,
            _kind: EntityKind,
            _key: &str,
        ) -> Result<Option<Entity>, RepositoryError> {
            Ok(None)
        }

        async fn get_all(&self, _kind: EntityKind) -> Result<Vec<Entity>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn delete(&self, _kind: EntityKind, _key: &str) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_saves_uruguay_exactly_once() {
        let repo = RecordingRepository::default();
        let count = populate_db(&repo).await.unwrap();

        assert_eq!(count, 1);
        let saved = repo.saved.lock().unwrap();
        assert_eq!(
            *saved,
            vec![Entity::Country(Country {
                name: "Uruguay".to_string(),
                code: "UY".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn test_failing_save_propagates() {
        let repo = RecordingRepository {
            fail: true,
            ..Default::default()
        };

        let result = populate_db(&repo).await;
        assert!(matches!(result, Err(RepositoryError::Storage(_))));
        assert_eq!(repo.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_populate_through_trait_object() {
        let repo = MemoryRepository::new();
        let dyn_repo: &dyn Repository = &repo;
        populate_db(dyn_repo).await.unwrap();

        let found = repo.get(EntityKind::Country, "UY").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_repeated_population_does_not_duplicate_in_memory() {
        let repo = MemoryRepository::new();
        populate_db(&repo).await.unwrap();
        populate_db(&repo).await.unwrap();
        assert_eq!(repo.len().await, 1);
    }
}
