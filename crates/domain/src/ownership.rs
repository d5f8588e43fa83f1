//! Ownership and studio hierarchy rules.
//!
//! A model owns its own resources, a studio supervises resources of the models
//! currently assigned to it, and an administrator supervises everything.

use atelier_core::{CreatorId, StudioId};
use serde::{Deserialize, Serialize};

use crate::{ActorContext, ActorScope};

/// Ownership projection of a stored resource.
///
/// Media items, scheduled posts and analytics rows stay opaque; only the owning
/// creator and that creator's current studio matter for access decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    owner_id: CreatorId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner_studio_id: Option<StudioId>,
}

impl ResourceRef {
    /// Creates a resource reference owned by an unaffiliated creator.
    #[must_use]
    pub fn owned_by(owner_id: CreatorId) -> Self {
        Self {
            owner_id,
            owner_studio_id: None,
        }
    }

    /// Records the studio the owning creator is currently assigned to.
    #[must_use]
    pub fn with_owner_studio(mut self, owner_studio_id: StudioId) -> Self {
        self.owner_studio_id = Some(owner_studio_id);
        self
    }

    /// Returns the owning creator.
    #[must_use]
    pub fn owner_id(&self) -> &CreatorId {
        &self.owner_id
    }

    /// Returns the owning creator's studio, if the creator is assigned to one.
    #[must_use]
    pub fn owner_studio_id(&self) -> Option<&StudioId> {
        self.owner_studio_id.as_ref()
    }
}

/// Returns whether a studio may reach a model assigned to `model_studio_id`.
///
/// Both sides must be present and equal. An unassigned model is out of reach of
/// every studio.
#[must_use]
pub fn can_studio_access_model(
    studio_id: Option<&StudioId>,
    model_studio_id: Option<&StudioId>,
) -> bool {
    match (studio_id, model_studio_id) {
        (Some(studio_id), Some(model_studio_id)) => studio_id == model_studio_id,
        _ => false,
    }
}

impl ActorContext {
    /// Returns whether the actor is the creator owning the resource.
    #[must_use]
    pub fn owns(&self, resource: &ResourceRef) -> bool {
        self.creator_id()
            .is_some_and(|creator_id| creator_id == resource.owner_id())
    }

    /// Returns whether the actor supervises the resource through the hierarchy.
    ///
    /// Administrators supervise everything; studios supervise resources whose
    /// owner is currently assigned to them; creators supervise nothing.
    #[must_use]
    pub fn supervises(&self, resource: &ResourceRef) -> bool {
        match self.scope() {
            ActorScope::Platform => true,
            ActorScope::Studio(studio_id) => {
                can_studio_access_model(Some(&studio_id), resource.owner_studio_id())
            }
            ActorScope::Creator(_) | ActorScope::Nothing => false,
        }
    }
}
