use std::collections::BTreeSet;

use atelier_core::{CreatorId, StudioId};
use serde::{Deserialize, Serialize};

use crate::{ActorContext, ActorScope, ResourceRef, can_studio_access_model};

/// Declarative predicate a storage layer must apply to list or search queries.
///
/// Produced fresh per query and consumed by the caller's storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResourceFilter {
    /// No restriction.
    Unrestricted,
    /// Resources whose owner is currently assigned to the studio.
    OwnerStudioEquals(StudioId),
    /// Resources owned by the creator.
    OwnerEquals(CreatorId),
    /// Resources owned by any creator in the set.
    OwnerIn(BTreeSet<CreatorId>),
    /// Matches no resource.
    MatchNothing,
}

impl ResourceFilter {
    /// Compiles the scoping predicate for an actor.
    ///
    /// Roles lacking the identity they need compile to [`Self::MatchNothing`].
    #[must_use]
    pub fn for_actor(actor: &ActorContext) -> Self {
        match actor.scope() {
            ActorScope::Platform => Self::Unrestricted,
            ActorScope::Studio(studio_id) => Self::OwnerStudioEquals(studio_id),
            ActorScope::Creator(creator_id) => Self::OwnerEquals(creator_id),
            ActorScope::Nothing => Self::MatchNothing,
        }
    }

    /// Returns an owner-set filter, collapsing an empty set to [`Self::MatchNothing`].
    #[must_use]
    pub fn owner_in(owners: impl IntoIterator<Item = CreatorId>) -> Self {
        let owners: BTreeSet<CreatorId> = owners.into_iter().collect();
        if owners.is_empty() {
            Self::MatchNothing
        } else {
            Self::OwnerIn(owners)
        }
    }

    /// Evaluates the predicate against one resource.
    #[must_use]
    pub fn matches(&self, resource: &ResourceRef) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::OwnerStudioEquals(studio_id) => {
                can_studio_access_model(Some(studio_id), resource.owner_studio_id())
            }
            Self::OwnerEquals(creator_id) => creator_id == resource.owner_id(),
            Self::OwnerIn(owners) => owners.contains(resource.owner_id()),
            Self::MatchNothing => false,
        }
    }

    /// Returns whether the predicate can never select a resource.
    #[must_use]
    pub fn selects_nothing(&self) -> bool {
        match self {
            Self::MatchNothing => true,
            Self::OwnerIn(owners) => owners.is_empty(),
            Self::Unrestricted | Self::OwnerStudioEquals(_) | Self::OwnerEquals(_) => false,
        }
    }
}
