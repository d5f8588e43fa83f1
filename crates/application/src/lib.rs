//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_engine;
mod resource_scope_service;

pub use authorization_engine::{
    AccessDecision, AuthorizationEngine, can_manage_models, is_admin, is_model, is_studio,
};
pub use resource_scope_service::{
    MAX_INLINE_OWNER_IDS_ENV, ModelRosterRepository, ResourceScopeConfig, ResourceScopeService,
};
