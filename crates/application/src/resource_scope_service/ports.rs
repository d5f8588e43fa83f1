use async_trait::async_trait;

use atelier_core::{AppResult, CreatorId, StudioId};

/// Repository port for creator-to-studio assignments.
#[async_trait]
pub trait ModelRosterRepository: Send + Sync {
    /// Lists at most `limit` creators currently assigned to the studio, ordered
    /// by creator id.
    async fn list_models_for_studio(
        &self,
        studio_id: &StudioId,
        limit: usize,
    ) -> AppResult<Vec<CreatorId>>;

    /// Returns the studio a creator is currently assigned to, if any.
    async fn find_studio_for_model(&self, creator_id: &CreatorId) -> AppResult<Option<StudioId>>;
}
