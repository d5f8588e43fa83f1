//! Resolution of actor filters into the predicates storage adapters execute.
//!
//! Studio filters name the studio only; the query layer either joins on the
//! creator assignment table or inlines the studio's current roster. This
//! service picks between the two using [`ResourceScopeConfig`].

mod config;
mod ports;
mod service;

pub use config::{MAX_INLINE_OWNER_IDS_ENV, ResourceScopeConfig};
pub use ports::ModelRosterRepository;
pub use service::ResourceScopeService;
