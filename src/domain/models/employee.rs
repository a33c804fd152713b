//! Employee domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee record as exposed by the façade.
///
/// Records are immutable once constructed: the upstream store is the system
/// of record, and changes arrive as whole-snapshot replacement rather than
/// in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Upstream-assigned unique identifier.
    pub id: Uuid,
    /// Display name. The upstream store may omit it.
    pub name: Option<String>,
    /// Annual salary.
    pub salary: u32,
    /// Age in years.
    pub age: u32,
    /// Job title.
    pub title: String,
    /// Upstream-assigned contact address.
    pub email: Option<String>,
}

/// Payload for creating a new employee.
///
/// `id` and `email` are assigned by the upstream store and are never
/// client-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Annual salary.
    pub salary: u32,
    /// Age in years.
    pub age: u32,
    /// Job title.
    pub title: String,
}
