use atelier_domain::{ResourceFilter, ResourceRef};
use tokio::sync::RwLock;

/// In-memory resource store whose listings always apply a resource filter.
#[derive(Debug)]
pub struct InMemoryResourceStore<T> {
    resources: RwLock<Vec<(ResourceRef, T)>>,
}

impl<T> Default for InMemoryResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryResourceStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resources: RwLock::new(Vec::new()),
        }
    }

    /// Stores a resource together with its ownership projection.
    pub async fn insert(&self, ownership: ResourceRef, resource: T) {
        self.resources.write().await.push((ownership, resource));
    }

    /// Returns the number of stored resources regardless of scope.
    pub async fn len(&self) -> usize {
        self.resources.read().await.len()
    }

    /// Returns whether the store holds no resources.
    pub async fn is_empty(&self) -> bool {
        self.resources.read().await.is_empty()
    }
}

impl<T: Clone> InMemoryResourceStore<T> {
    /// Lists the resources selected by `filter` in insertion order.
    pub async fn list(&self, filter: &ResourceFilter) -> Vec<T> {
        if filter.selects_nothing() {
            return Vec::new();
        }

        self.resources
            .read()
            .await
            .iter()
            .filter(|(ownership, _)| filter.matches(ownership))
            .map(|(_, resource)| resource.clone())
            .collect()
    }
}
