//! Identifier-to-name delete reconciliation.
//!
//! Upstream only supports delete-by-name while callers address employees by
//! id. The reconciler resolves the id against upstream, then refuses to
//! issue the destructive call unless exactly one directory record carries
//! the resolved name and that record is the one requested.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::adapters::cache::DirectoryCache;
use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::DeleteOutcome;
use crate::domain::ports::EmployeeStore;

/// Translates delete-by-id requests into the upstream's delete-by-name
/// primitive without ever deleting the wrong record.
pub struct DeletionReconciler<S: EmployeeStore + 'static> {
    upstream: Arc<S>,
    cache: Arc<DirectoryCache<S>>,
}

impl<S: EmployeeStore + 'static> DeletionReconciler<S> {
    /// Create a reconciler over the given upstream store and cache.
    pub fn new(upstream: Arc<S>, cache: Arc<DirectoryCache<S>>) -> Self {
        Self { upstream, cache }
    }

    /// Attempt to delete the employee with the given id.
    ///
    /// The exact-match gate is the load-bearing invariant: the delete call
    /// is issued only when exactly one record in the current directory
    /// carries the resolved name (case-insensitively) and its id equals the
    /// requested id. Everything else is reported as an outcome, never
    /// escalated into a destructive call.
    pub async fn delete_by_id(&self, id: Uuid) -> StoreResult<DeleteOutcome> {
        // Resolve directly against upstream: the cached directory may lag
        // behind the exact record being targeted.
        let target = match self.upstream.fetch_by_id(id).await {
            Ok(employee) => employee,
            Err(StoreError::NotFound(_)) => {
                info!(%id, "delete requested for unknown employee");
                return Ok(DeleteOutcome::NotFound);
            }
            Err(err) => return Err(err),
        };

        let Some(target_name) = target.name else {
            // A nameless record cannot be addressed through the name-only
            // delete primitive.
            warn!(%id, "delete refused: resolved record has no name");
            return Ok(DeleteOutcome::Ambiguous { matches: 0 });
        };

        let snapshot = self.cache.get_all().await?;
        let target_name_lower = target_name.to_lowercase();
        let matches: Vec<_> = snapshot
            .iter()
            .filter(|employee| {
                employee
                    .name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase() == target_name_lower)
            })
            .collect();

        let gate_passes = matches.len() == 1 && matches[0].id == id;
        if !gate_passes {
            warn!(
                %id,
                name = %target_name,
                matches = matches.len(),
                "delete refused: cannot disambiguate employee by name"
            );
            return Ok(DeleteOutcome::Ambiguous {
                matches: matches.len(),
            });
        }

        let confirmed = match self.upstream.delete_by_name(&target_name).await {
            Ok(confirmed) => confirmed,
            Err(err) => {
                // The destructive call was issued and its effect is unknown,
                // so the snapshot can no longer be trusted.
                self.cache.invalidate().await;
                return Err(err);
            }
        };

        if confirmed {
            self.cache.invalidate().await;
            info!(%id, name = %target_name, "employee deleted");
            Ok(DeleteOutcome::Deleted)
        } else {
            let reason = format!("employee with id {id} was not deleted");
            warn!(%id, "upstream declined the delete");
            Ok(DeleteOutcome::NotDeleted { reason })
        }
    }
}
