//! Read-only queries over the cached directory.
//!
//! Every operation reads one snapshot through the cache and computes over
//! it; no additional upstream calls are made mid-query. The computations
//! themselves are pure functions so they can be exercised without a cache.

use std::sync::Arc;

use crate::adapters::cache::DirectoryCache;
use crate::domain::errors::StoreResult;
use crate::domain::models::{DirectorySnapshot, Employee};
use crate::domain::ports::EmployeeStore;

/// Query engine over the cached employee directory.
pub struct QueryService<S: EmployeeStore + 'static> {
    cache: Arc<DirectoryCache<S>>,
}

impl<S: EmployeeStore + 'static> QueryService<S> {
    /// Create a query service over the given cache.
    pub fn new(cache: Arc<DirectoryCache<S>>) -> Self {
        Self { cache }
    }

    /// Employees whose name contains `fragment`, in snapshot order.
    pub async fn search_by_name(&self, fragment: &str) -> StoreResult<Vec<Employee>> {
        let snapshot = self.cache.get_all().await?;
        Ok(search_by_name(&snapshot, fragment))
    }

    /// Maximum salary across the directory, `None` when it is empty.
    ///
    /// The caller-facing layer decides the externally visible default for
    /// the empty case; the engine never conflates "no data" with zero.
    pub async fn highest_salary(&self) -> StoreResult<Option<u32>> {
        let snapshot = self.cache.get_all().await?;
        Ok(highest_salary(&snapshot))
    }

    /// Names of the top `count` earners, highest first.
    pub async fn top_earning_names(&self, count: usize) -> StoreResult<Vec<String>> {
        let snapshot = self.cache.get_all().await?;
        Ok(top_earning_names(&snapshot, count))
    }
}

/// Case-sensitive substring match on names, preserving snapshot order.
///
/// Records without a name never match; the empty fragment matches every
/// named record.
pub fn search_by_name(snapshot: &DirectorySnapshot, fragment: &str) -> Vec<Employee> {
    snapshot
        .iter()
        .filter(|employee| {
            employee
                .name
                .as_deref()
                .is_some_and(|name| name.contains(fragment))
        })
        .cloned()
        .collect()
}

/// Maximum salary in the snapshot, `None` when it is empty.
pub fn highest_salary(snapshot: &DirectorySnapshot) -> Option<u32> {
    snapshot.iter().map(|employee| employee.salary).max()
}

/// Names of the `count` highest earners, descending by salary.
///
/// The sort is stable, so records with equal salaries keep their snapshot
/// order. Records without a name occupy their rank but contribute no name,
/// which keeps lower earners from being promoted into the top `count`.
pub fn top_earning_names(snapshot: &DirectorySnapshot, count: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = snapshot.iter().collect();
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(count)
        .filter_map(|employee| employee.name.clone())
        .collect()
}
