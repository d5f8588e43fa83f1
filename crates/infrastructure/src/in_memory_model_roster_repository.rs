use std::collections::HashMap;

use async_trait::async_trait;
use atelier_application::ModelRosterRepository;
use atelier_core::{AppResult, CreatorId, StudioId};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory creator assignment roster.
#[derive(Debug, Default)]
pub struct InMemoryModelRosterRepository {
    assignments: RwLock<HashMap<CreatorId, StudioId>>,
}

impl InMemoryModelRosterRepository {
    /// Creates an empty in-memory roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignments: RwLock::new(HashMap::new()),
        }
    }

    /// Assigns a creator to a studio, replacing any previous assignment.
    ///
    /// Returns the studio the creator was assigned to before, if any.
    pub async fn assign(&self, creator_id: CreatorId, studio_id: StudioId) -> Option<StudioId> {
        debug!(creator_id = %creator_id, studio_id = %studio_id, "assigning creator to studio");
        self.assignments.write().await.insert(creator_id, studio_id)
    }

    /// Removes a creator from its studio.
    ///
    /// Returns the studio the creator left, if it was assigned.
    pub async fn unassign(&self, creator_id: &CreatorId) -> Option<StudioId> {
        debug!(creator_id = %creator_id, "removing creator from studio");
        self.assignments.write().await.remove(creator_id)
    }
}

#[async_trait]
impl ModelRosterRepository for InMemoryModelRosterRepository {
    async fn list_models_for_studio(
        &self,
        studio_id: &StudioId,
        limit: usize,
    ) -> AppResult<Vec<CreatorId>> {
        let assignments = self.assignments.read().await;

        let mut creators: Vec<CreatorId> = assignments
            .iter()
            .filter(|(_, assigned_studio)| *assigned_studio == studio_id)
            .map(|(creator_id, _)| creator_id.clone())
            .collect();
        creators.sort();
        creators.truncate(limit);

        Ok(creators)
    }

    async fn find_studio_for_model(&self, creator_id: &CreatorId) -> AppResult<Option<StudioId>> {
        Ok(self.assignments.read().await.get(creator_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use atelier_application::ModelRosterRepository;
    use atelier_core::{AppResult, CreatorId, StudioId};

    use super::InMemoryModelRosterRepository;

    #[tokio::test]
    async fn roster_lists_assigned_creators_in_order() -> AppResult<()> {
        let roster = InMemoryModelRosterRepository::new();
        roster.assign(CreatorId::new("m2")?, StudioId::new("s1")?).await;
        roster.assign(CreatorId::new("m1")?, StudioId::new("s1")?).await;
        roster.assign(CreatorId::new("m3")?, StudioId::new("s2")?).await;

        let listed = roster.list_models_for_studio(&StudioId::new("s1")?, 10).await?;
        let names: Vec<&str> = listed.iter().map(CreatorId::as_str).collect();
        assert_eq!(names, vec!["m1", "m2"]);

        let bounded = roster.list_models_for_studio(&StudioId::new("s1")?, 1).await?;
        assert_eq!(bounded, vec![CreatorId::new("m1")?]);
        Ok(())
    }

    #[tokio::test]
    async fn reassignment_moves_creator_between_studios() -> AppResult<()> {
        let roster = InMemoryModelRosterRepository::new();
        let creator = CreatorId::new("m1")?;

        assert_eq!(roster.assign(creator.clone(), StudioId::new("s1")?).await, None);
        let previous = roster.assign(creator.clone(), StudioId::new("s2")?).await;
        assert_eq!(previous.as_ref().map(StudioId::as_str), Some("s1"));

        assert!(roster
            .list_models_for_studio(&StudioId::new("s1")?, 10)
            .await?
            .is_empty());
        let current = roster.find_studio_for_model(&creator).await?;
        assert_eq!(current.as_ref().map(StudioId::as_str), Some("s2"));
        Ok(())
    }

    #[tokio::test]
    async fn unassigned_creator_has_no_studio() -> AppResult<()> {
        let roster = InMemoryModelRosterRepository::new();
        let creator = CreatorId::new("m1")?;
        roster.assign(creator.clone(), StudioId::new("s1")?).await;

        assert!(roster.unassign(&creator).await.is_some());
        assert_eq!(roster.find_studio_for_model(&creator).await?, None);
        assert!(roster.unassign(&creator).await.is_none());
        Ok(())
    }
}
