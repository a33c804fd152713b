//! Wire types for the remote employee store.
//!
//! Upstream wraps every payload in an envelope whose status tag is carried
//! independently of the HTTP status, serialized as a full sentence on the
//! wire. Employee resources use the upstream `employee_*` field naming and
//! are translated to the domain model at this boundary only.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::{Employee, NewEmployee};

/// Response envelope wrapping every upstream payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Payload, absent on errors and on empty results.
    #[serde(default)]
    pub data: Option<T>,
    /// Upstream's own success/error tag.
    pub status: EnvelopeStatus,
    /// Error description, present when `status` is `Error`.
    #[serde(default)]
    pub error: Option<String>,
}

/// Upstream status tag. The wire values are full sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    /// The request was processed.
    #[serde(rename = "Successfully processed request.")]
    Handled,
    /// Upstream failed to process the request, whatever the HTTP status.
    #[serde(rename = "Failed to process request.")]
    Error,
}

/// Employee resource as represented by the upstream store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireEmployee {
    /// Upstream-assigned identifier.
    pub id: Uuid,
    /// Display name, may be absent.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Annual salary.
    pub employee_salary: u32,
    /// Age in years.
    pub employee_age: u32,
    /// Job title.
    pub employee_title: String,
    /// Contact address, may be absent.
    #[serde(default)]
    pub employee_email: Option<String>,
}

impl From<WireEmployee> for Employee {
    fn from(wire: WireEmployee) -> Self {
        Self {
            id: wire.id,
            name: wire.employee_name,
            salary: wire.employee_salary,
            age: wire.employee_age,
            title: wire.employee_title,
            email: wire.employee_email,
        }
    }
}

/// Create payload forwarded upstream. Identifier and email are
/// server-assigned and never sent.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEmployeeBody {
    /// Display name.
    pub name: String,
    /// Annual salary.
    pub salary: u32,
    /// Age in years.
    pub age: u32,
    /// Job title.
    pub title: String,
}

impl From<&NewEmployee> for CreateEmployeeBody {
    fn from(payload: &NewEmployee) -> Self {
        Self {
            name: payload.name.clone(),
            salary: payload.salary,
            age: payload.age,
            title: payload.title.clone(),
        }
    }
}

/// Body of the name-addressed delete call.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteByNameBody {
    /// Exact name of the employee to delete.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_status_parses_wire_sentences() {
        let json = r#"{
            "data": [],
            "status": "Successfully processed request."
        }"#;
        let envelope: Envelope<Vec<WireEmployee>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, EnvelopeStatus::Handled);
        assert_eq!(envelope.data.unwrap().len(), 0);

        let json = r#"{
            "status": "Failed to process request.",
            "error": "boom"
        }"#;
        let envelope: Envelope<Vec<WireEmployee>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, EnvelopeStatus::Error);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_wire_employee_translates_to_domain() {
        let json = r#"{
            "id": "5255f1f5-b1a1-4681-b2a7-c6e9bbbf4cb0",
            "employee_name": "Ada Lovelace",
            "employee_salary": 320800,
            "employee_age": 36,
            "employee_title": "Principal Engineer",
            "employee_email": "ada@example.com"
        }"#;
        let wire: WireEmployee = serde_json::from_str(json).unwrap();
        let employee = Employee::from(wire);

        assert_eq!(employee.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(employee.salary, 320_800);
        assert_eq!(employee.age, 36);
        assert_eq!(employee.title, "Principal Engineer");
        assert_eq!(employee.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_create_body_carries_only_client_fields() {
        let payload = NewEmployee {
            name: "Grace Hopper".to_string(),
            salary: 250_000,
            age: 40,
            title: "Rear Admiral".to_string(),
        };
        let body = CreateEmployeeBody::from(&payload);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Grace Hopper",
                "salary": 250_000,
                "age": 40,
                "title": "Rear Admiral"
            })
        );
    }
}
