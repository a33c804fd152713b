//! Port for the remote employee store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreResult;
use crate::domain::models::{Employee, NewEmployee};

/// Read/write access to the remote system of record for employee data.
///
/// This is the only seam the service layer sees. Implementations classify
/// transport failures into [`crate::domain::errors::StoreError`] at this
/// boundary and nowhere else, and perform no retries: a failed call fails
/// the caller's operation immediately.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Fetch the entire employee collection.
    async fn fetch_all(&self) -> StoreResult<Vec<Employee>>;

    /// Fetch a single employee by upstream identifier.
    ///
    /// Fails with `StoreError::NotFound` when upstream reports no such
    /// record.
    async fn fetch_by_id(&self, id: Uuid) -> StoreResult<Employee>;

    /// Create a new employee. Upstream assigns the id and email.
    async fn create(&self, payload: &NewEmployee) -> StoreResult<Employee>;

    /// Delete the employee carrying exactly this name.
    ///
    /// Returns upstream's confirmation flag: `false` means upstream declined
    /// the delete without treating it as an error.
    async fn delete_by_name(&self, name: &str) -> StoreResult<bool>;
}
