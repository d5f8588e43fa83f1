use std::collections::BTreeSet;

use atelier_core::{AppError, AppResult};
use atelier_domain::{
    ActorClaims, ActorContext, Permission, ResourceFilter, ResourceRef, Role,
    RolePermissionMatrix,
};
use tracing::{debug, warn};

/// Outcome of a single-resource access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The actor holds the permission and the resource is within its reach.
    Allowed,
    /// The actor's role does not hold the permission.
    MissingPermission,
    /// The actor holds the permission but the resource is outside its reach.
    OutsideScope,
}

impl AccessDecision {
    /// Returns whether access is granted.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns a stable label used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::MissingPermission => "missing_permission",
            Self::OutsideScope => "outside_scope",
        }
    }
}

/// Decision functions combining the role matrix with the ownership model.
///
/// Holds only a shared reference to the immutable matrix, so copies can be
/// handed to any number of concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationEngine {
    matrix: &'static RolePermissionMatrix,
}

impl AuthorizationEngine {
    /// Creates an engine over the provided matrix.
    #[must_use]
    pub fn new(matrix: &'static RolePermissionMatrix) -> Self {
        Self { matrix }
    }

    /// Returns the permissions held by a role.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> &'static BTreeSet<Permission> {
        self.matrix.permissions_for(role)
    }

    /// Returns the permissions held by a raw role claim, empty when unrecognized.
    #[must_use]
    pub fn permissions_for_claim(&self, role_claim: &str) -> &'static BTreeSet<Permission> {
        self.matrix.permissions_for_claim(role_claim)
    }

    /// Returns whether the role holds the permission.
    #[must_use]
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.matrix.has_permission(role, permission)
    }

    /// Returns whether the role holds every permission; true for an empty list.
    #[must_use]
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        self.matrix.has_all_permissions(role, permissions)
    }

    /// Returns whether the role holds any permission; false for an empty list.
    #[must_use]
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        self.matrix.has_any_permission(role, permissions)
    }

    /// Decides whether the actor may exercise `permission` on `resource`.
    ///
    /// Capability is checked before scope: the role must hold the permission,
    /// then the resource must be owned (model) or supervised (studio, admin).
    #[must_use]
    pub fn decide(
        &self,
        actor: &ActorContext,
        resource: &ResourceRef,
        permission: Permission,
    ) -> AccessDecision {
        let decision = if !self.has_permission(actor.role(), permission) {
            AccessDecision::MissingPermission
        } else {
            let in_scope = match actor.role() {
                Role::Admin => true,
                Role::Model => actor.owns(resource),
                Role::Studio => actor.supervises(resource),
            };

            if in_scope {
                AccessDecision::Allowed
            } else {
                AccessDecision::OutsideScope
            }
        };

        debug!(
            role = %actor.role(),
            actor_id = %actor.actor_id(),
            permission = %permission,
            owner_id = %resource.owner_id(),
            outcome = decision.as_str(),
            "access decision"
        );

        decision
    }

    /// Returns whether the actor may exercise `permission` on `resource`.
    #[must_use]
    pub fn can_access_resource(
        &self,
        actor: &ActorContext,
        resource: &ResourceRef,
        permission: Permission,
    ) -> bool {
        self.decide(actor, resource, permission).is_allowed()
    }

    /// Same as [`Self::can_access_resource`] for unverified claims; invalid
    /// claims are denied.
    #[must_use]
    pub fn can_access_resource_with_claims(
        &self,
        claims: &ActorClaims,
        resource: &ResourceRef,
        permission: Permission,
    ) -> bool {
        context_from_claims(claims)
            .is_some_and(|actor| self.can_access_resource(&actor, resource, permission))
    }

    /// Returns whether the actor supervises the resource through the hierarchy.
    ///
    /// Independent of permissions. Creators own resources but never supervise.
    #[must_use]
    pub fn can_supervise_resource(&self, actor: &ActorContext, resource: &ResourceRef) -> bool {
        actor.supervises(resource)
    }

    /// Returns the predicate list queries must apply for this actor.
    #[must_use]
    pub fn resource_filter(&self, actor: &ActorContext) -> ResourceFilter {
        let filter = ResourceFilter::for_actor(actor);
        if filter.selects_nothing() {
            warn!(
                role = %actor.role(),
                actor_id = %actor.actor_id(),
                "actor lacks the identity its role needs; scoping to nothing"
            );
        }

        filter
    }

    /// Same as [`Self::resource_filter`] for unverified claims; invalid claims
    /// match nothing.
    #[must_use]
    pub fn resource_filter_for_claims(&self, claims: &ActorClaims) -> ResourceFilter {
        context_from_claims(claims).map_or(ResourceFilter::MatchNothing, |actor| {
            self.resource_filter(&actor)
        })
    }

    /// Ensures the actor's role holds the permission.
    pub fn require_permission(
        &self,
        actor: &ActorContext,
        permission: Permission,
    ) -> AppResult<()> {
        if self.has_permission(actor.role(), permission) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "{} '{}' is missing permission '{}'",
            actor.role(),
            actor.actor_id(),
            permission.as_str()
        )))
    }

    /// Ensures the actor may exercise `permission` on `resource`.
    pub fn require_resource_access(
        &self,
        actor: &ActorContext,
        resource: &ResourceRef,
        permission: Permission,
    ) -> AppResult<()> {
        match self.decide(actor, resource, permission) {
            AccessDecision::Allowed => Ok(()),
            AccessDecision::MissingPermission => Err(AppError::Forbidden(format!(
                "{} '{}' is missing permission '{}'",
                actor.role(),
                actor.actor_id(),
                permission.as_str()
            ))),
            AccessDecision::OutsideScope => Err(AppError::Forbidden(format!(
                "{} '{}' may not use '{}' on resources owned by '{}'",
                actor.role(),
                actor.actor_id(),
                permission.as_str(),
                resource.owner_id()
            ))),
        }
    }
}

impl Default for AuthorizationEngine {
    fn default() -> Self {
        Self::new(RolePermissionMatrix::standard())
    }
}

/// Returns whether the role is a platform administrator.
#[must_use]
pub fn is_admin(role: Role) -> bool {
    matches!(role, Role::Admin)
}

/// Returns whether the role is a studio.
#[must_use]
pub fn is_studio(role: Role) -> bool {
    matches!(role, Role::Studio)
}

/// Returns whether the role is a model.
#[must_use]
pub fn is_model(role: Role) -> bool {
    matches!(role, Role::Model)
}

/// Returns whether the role may manage creator assignments.
#[must_use]
pub fn can_manage_models(role: Role) -> bool {
    match role {
        Role::Admin | Role::Studio => true,
        Role::Model => false,
    }
}

fn context_from_claims(claims: &ActorClaims) -> Option<ActorContext> {
    ActorContext::try_from(claims.clone())
        .map_err(|error| {
            warn!(
                role = %claims.role,
                actor_id = %claims.actor_id,
                %error,
                "rejected actor claims"
            );
        })
        .ok()
}
