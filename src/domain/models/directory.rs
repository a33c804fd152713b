//! Point-in-time snapshot of the employee directory.

use std::sync::Arc;

use crate::domain::models::Employee;

/// A complete, internally consistent copy of the upstream employee
/// collection, in upstream order.
///
/// The record list is immutable and `Arc`-shared, so snapshots are cheap to
/// clone and can be handed to any number of concurrent readers. The cache
/// either holds a whole snapshot or nothing; partial snapshots are never
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    records: Arc<[Employee]>,
}

impl DirectorySnapshot {
    /// Build a snapshot from a fetched collection, preserving its order.
    pub fn new(records: Vec<Employee>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records, in upstream order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the upstream collection was empty at fetch time.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in snapshot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.records.iter()
    }
}

impl From<Vec<Employee>> for DirectorySnapshot {
    fn from(records: Vec<Employee>) -> Self {
        Self::new(records)
    }
}
