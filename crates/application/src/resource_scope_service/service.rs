use std::sync::Arc;

use atelier_core::{AppResult, CreatorId};
use atelier_domain::{ActorClaims, ActorContext, ResourceFilter, ResourceRef};
use tracing::{debug, warn};

use super::config::ResourceScopeConfig;
use super::ports::ModelRosterRepository;
use crate::AuthorizationEngine;

/// Application service turning actor filters into executable predicates.
#[derive(Clone)]
pub struct ResourceScopeService {
    engine: AuthorizationEngine,
    roster: Arc<dyn ModelRosterRepository>,
    config: ResourceScopeConfig,
}

impl ResourceScopeService {
    /// Creates a new resource scope service.
    #[must_use]
    pub fn new(
        engine: AuthorizationEngine,
        roster: Arc<dyn ModelRosterRepository>,
        config: ResourceScopeConfig,
    ) -> Self {
        Self {
            engine,
            roster,
            config,
        }
    }

    /// Resolves the filter a list query must apply for the actor.
    ///
    /// Studio filters become the studio's current roster when it is small
    /// enough to inline, and [`ResourceFilter::MatchNothing`] when the studio
    /// has no creators. Every other filter passes through unchanged.
    pub async fn resolve_filter(&self, actor: &ActorContext) -> AppResult<ResourceFilter> {
        let studio_id = match self.engine.resource_filter(actor) {
            ResourceFilter::OwnerStudioEquals(studio_id) => studio_id,
            filter => return Ok(filter),
        };

        // One row past the limit tells an oversized roster apart.
        let limit = self.config.max_inline_owner_ids.saturating_add(1);
        let roster = self.roster.list_models_for_studio(&studio_id, limit).await?;
        if roster.len() > self.config.max_inline_owner_ids {
            debug!(
                studio_id = %studio_id,
                max_inline_owner_ids = self.config.max_inline_owner_ids,
                "keeping studio filter as a join condition"
            );
            return Ok(ResourceFilter::OwnerStudioEquals(studio_id));
        }

        debug!(
            studio_id = %studio_id,
            roster_size = roster.len(),
            "inlining studio roster into owner filter"
        );
        Ok(ResourceFilter::owner_in(roster))
    }

    /// Same as [`Self::resolve_filter`] for unverified claims.
    pub async fn resolve_filter_for_claims(
        &self,
        claims: &ActorClaims,
    ) -> AppResult<ResourceFilter> {
        match ActorContext::try_from(claims.clone()) {
            Ok(actor) => self.resolve_filter(&actor).await,
            Err(error) => {
                warn!(
                    role = %claims.role,
                    actor_id = %claims.actor_id,
                    %error,
                    "rejected actor claims"
                );
                Ok(ResourceFilter::MatchNothing)
            }
        }
    }

    /// Projects the ownership of a resource owned by `owner_id`, including the
    /// owner's current studio assignment.
    pub async fn project_ownership(&self, owner_id: CreatorId) -> AppResult<ResourceRef> {
        let owner_studio_id = self.roster.find_studio_for_model(&owner_id).await?;
        let resource = ResourceRef::owned_by(owner_id);

        Ok(match owner_studio_id {
            Some(studio_id) => resource.with_owner_studio(studio_id),
            None => resource,
        })
    }

    /// Keeps the items whose ownership the actor's resolved filter selects.
    pub async fn visible_resources<T, F>(
        &self,
        actor: &ActorContext,
        items: Vec<T>,
        ownership: F,
    ) -> AppResult<Vec<T>>
    where
        F: Fn(&T) -> &ResourceRef,
    {
        let filter = self.resolve_filter(actor).await?;
        if filter.selects_nothing() {
            return Ok(Vec::new());
        }

        Ok(items
            .into_iter()
            .filter(|item| filter.matches(ownership(item)))
            .collect())
    }
}
