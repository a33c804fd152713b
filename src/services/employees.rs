//! Caller-facing employee operations that are not pure queries.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::adapters::cache::DirectoryCache;
use crate::domain::errors::StoreResult;
use crate::domain::models::{Employee, NewEmployee};
use crate::domain::ports::EmployeeStore;

/// List, lookup, and creation over the employee directory.
pub struct EmployeeService<S: EmployeeStore + 'static> {
    upstream: Arc<S>,
    cache: Arc<DirectoryCache<S>>,
}

impl<S: EmployeeStore + 'static> EmployeeService<S> {
    /// Create an employee service over the given upstream store and cache.
    pub fn new(upstream: Arc<S>, cache: Arc<DirectoryCache<S>>) -> Self {
        Self { upstream, cache }
    }

    /// All employees known at the last refresh.
    pub async fn list_all(&self) -> StoreResult<Vec<Employee>> {
        let snapshot = self.cache.get_all().await?;
        Ok(snapshot.records().to_vec())
    }

    /// Fetch one employee straight from upstream, bypassing the cache.
    pub async fn get_by_id(&self, id: Uuid) -> StoreResult<Employee> {
        self.upstream.fetch_by_id(id).await
    }

    /// Forward a new-employee payload upstream and return the assigned
    /// record.
    ///
    /// The snapshot is dropped whenever the write was issued, success or
    /// not: a failed create may still have completed upstream, and the next
    /// read must refetch rather than trust a possibly stale directory.
    pub async fn create(&self, payload: NewEmployee) -> StoreResult<Employee> {
        let result = self.upstream.create(&payload).await;
        self.cache.invalidate().await;
        let employee = result?;
        info!(id = %employee.id, "employee created");
        Ok(employee)
    }
}
