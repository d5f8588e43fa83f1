use std::str::FromStr;

use atelier_core::{ActorId, AppError, CreatorId, StudioId};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Identity of the caller for one access decision.
///
/// Built per request from the identity provider's verified session and never
/// persisted by the access engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorContext {
    role: Role,
    actor_id: ActorId,
    creator_id: Option<CreatorId>,
    studio_id: Option<StudioId>,
}

impl ActorContext {
    /// Creates an actor context from arbitrary identity fields.
    ///
    /// Fields irrelevant to the role are kept as supplied; fields a role needs
    /// but lacks make every scoped decision deny. A model's creator must be
    /// the actor itself, any other creator is dropped and the model has no
    /// reach.
    #[must_use]
    pub fn new(
        role: Role,
        actor_id: ActorId,
        creator_id: Option<CreatorId>,
        studio_id: Option<StudioId>,
    ) -> Self {
        let creator_id = match role {
            Role::Model => {
                creator_id.filter(|creator_id| *creator_id == CreatorId::from_actor(&actor_id))
            }
            Role::Admin | Role::Studio => creator_id,
        };

        Self {
            role,
            actor_id,
            creator_id,
            studio_id,
        }
    }

    /// Creates a platform administrator context.
    #[must_use]
    pub fn admin(actor_id: ActorId) -> Self {
        Self::new(Role::Admin, actor_id, None, None)
    }

    /// Creates a studio context. A studio without a linked record has no reach.
    #[must_use]
    pub fn studio(actor_id: ActorId, studio_id: Option<StudioId>) -> Self {
        Self::new(Role::Studio, actor_id, None, studio_id)
    }

    /// Creates a model context; the model is the creator it represents.
    #[must_use]
    pub fn model(actor_id: ActorId) -> Self {
        let creator_id = CreatorId::from_actor(&actor_id);
        Self::new(Role::Model, actor_id, Some(creator_id), None)
    }

    /// Returns the actor role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the stable actor identifier.
    #[must_use]
    pub fn actor_id(&self) -> &ActorId {
        &self.actor_id
    }

    /// Returns the creator the actor is or acts as, if any.
    #[must_use]
    pub fn creator_id(&self) -> Option<&CreatorId> {
        self.creator_id.as_ref()
    }

    /// Returns the studio the actor belongs to, if any.
    #[must_use]
    pub fn studio_id(&self) -> Option<&StudioId> {
        self.studio_id.as_ref()
    }

    /// Resolves the reach of this actor over owned resources.
    #[must_use]
    pub fn scope(&self) -> ActorScope {
        match self.role {
            Role::Admin => ActorScope::Platform,
            Role::Studio => self
                .studio_id
                .clone()
                .map_or(ActorScope::Nothing, ActorScope::Studio),
            Role::Model => self
                .creator_id
                .clone()
                .map_or(ActorScope::Nothing, ActorScope::Creator),
        }
    }
}

/// Reach of an actor over owned resources, derived from role and identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorScope {
    /// Every resource on the platform.
    Platform,
    /// Resources of creators currently assigned to the studio.
    Studio(StudioId),
    /// Resources owned by the creator.
    Creator(CreatorId),
    /// No resource at all.
    Nothing,
}

/// Unverified identity fields as delivered by the authentication collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorClaims {
    /// Role transport value.
    pub role: String,
    /// Stable subject identifier.
    pub actor_id: String,
    /// Creator identifier, when the actor is or acts as a creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    /// Studio identifier, when the actor belongs to a studio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio_id: Option<String>,
}

impl TryFrom<ActorClaims> for ActorContext {
    type Error = AppError;

    fn try_from(claims: ActorClaims) -> Result<Self, Self::Error> {
        let role = Role::from_str(claims.role.as_str())?;
        let actor_id = ActorId::new(claims.actor_id)?;
        let creator_id = claims.creator_id.map(CreatorId::new).transpose()?;
        let studio_id = claims.studio_id.map(StudioId::new).transpose()?;

        // A model is the creator it represents.
        let creator_id = match (role, creator_id) {
            (Role::Model, None) => Some(CreatorId::from_actor(&actor_id)),
            (Role::Model, Some(creator_id))
                if creator_id != CreatorId::from_actor(&actor_id) =>
            {
                return Err(AppError::Validation(format!(
                    "model '{actor_id}' cannot act as creator '{creator_id}'"
                )));
            }
            (_, creator_id) => creator_id,
        };

        Ok(Self::new(role, actor_id, creator_id, studio_id))
    }
}
