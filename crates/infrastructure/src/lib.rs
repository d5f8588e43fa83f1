//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_model_roster_repository;
mod in_memory_resource_store;
mod postgres_model_roster_repository;
mod postgres_resource_filter;
mod telemetry;

pub use in_memory_model_roster_repository::InMemoryModelRosterRepository;
pub use in_memory_resource_store::InMemoryResourceStore;
pub use postgres_model_roster_repository::PostgresModelRosterRepository;
pub use postgres_resource_filter::push_resource_filter;
pub use telemetry::init_tracing;
