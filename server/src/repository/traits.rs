//! Repository Layer - Core Traits
//!
//! Abstract interfaces for data access, generic over any Entity type.
//! All operations are async; implementations serialize access to the
//! shared connection internally.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity (the entity's id is assigned by the database)
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
