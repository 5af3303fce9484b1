//! Shared test utilities for idea-db unit tests.

pub(crate) mod helpers {
    use std::sync::Mutex;

    use chrono::{DateTime, Utc};
    use idea_core::entities::Idea;
    use idea_core::enums::IdeaStatus;

    use crate::error::DatabaseError;
    use crate::service::IdeaService;
    use crate::store::IdeaStore;

    /// In-memory `IdeaStore` double. `failing()` errors on every call.
    #[derive(Default)]
    pub struct MemoryStore {
        ideas: Mutex<Vec<Idea>>,
        fail: bool,
    }

    impl MemoryStore {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), DatabaseError> {
            if self.fail {
                return Err(DatabaseError::Query("store unavailable".into()));
            }
            Ok(())
        }
    }

    impl IdeaStore for MemoryStore {
        async fn insert(&self, text: &str, submitted_at: DateTime<Utc>) -> Result<Idea, DatabaseError> {
            self.check()?;
            let mut ideas = self.ideas.lock().unwrap();
            let id = ideas.iter().map(|i| i.id).max().unwrap_or(0) + 1;
            let idea = Idea {
                id,
                text: text.to_string(),
                status: IdeaStatus::NotImplemented,
                submitted_at,
            };
            ideas.push(idea.clone());
            Ok(idea)
        }

        async fn list_all(&self) -> Result<Vec<Idea>, DatabaseError> {
            self.check()?;
            let mut ideas = self.ideas.lock().unwrap().clone();
            ideas.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at).then(b.id.cmp(&a.id)));
            Ok(ideas)
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<Idea>, DatabaseError> {
            self.check()?;
            Ok(self.ideas.lock().unwrap().iter().find(|i| i.id == id).cloned())
        }

        async fn update_status(&self, id: i64, status: IdeaStatus) -> Result<bool, DatabaseError> {
            self.check()?;
            let mut ideas = self.ideas.lock().unwrap();
            Ok(ideas
                .iter_mut()
                .find(|i| i.id == id)
                .map(|idea| idea.status = status)
                .is_some())
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
            self.check()?;
            let mut ideas = self.ideas.lock().unwrap();
            let before = ideas.len();
            ideas.retain(|i| i.id != id);
            Ok(ideas.len() < before)
        }
    }

    /// Service over an empty in-memory store.
    pub fn test_service() -> IdeaService<MemoryStore> {
        IdeaService::new(MemoryStore::default())
    }
}
