//! Domain entities and invariants of the access engine.

#![forbid(unsafe_code)]

mod actor;
mod filter;
mod matrix;
mod ownership;
mod permission;
mod role;

pub use actor::{ActorClaims, ActorContext, ActorScope};
pub use filter::ResourceFilter;
pub use matrix::RolePermissionMatrix;
pub use ownership::{ResourceRef, can_studio_access_model};
pub use permission::{Permission, ResourceKind};
pub use role::Role;
