//! HTTP handlers mapping the service layer onto the caller-facing API.
//!
//! Status conventions: empty search and top-N results answer 204, unknown
//! ids answer 404, refused deletes answer 501 with explanatory text, and
//! every other store failure answers 500. The "highest salary of an empty
//! directory is 0" convention lives here and nowhere else.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::adapters::cache::DirectoryCache;
use crate::domain::errors::StoreError;
use crate::domain::models::{DeleteOutcome, Employee, NewEmployee};
use crate::domain::ports::EmployeeStore;
use crate::services::{DeletionReconciler, EmployeeService, QueryService};

/// How many names the top-earners endpoint reports.
const TOP_EARNER_COUNT: usize = 10;

/// Shared state handed to every handler.
pub struct AppState<S: EmployeeStore + 'static> {
    employees: Arc<EmployeeService<S>>,
    queries: Arc<QueryService<S>>,
    reconciler: Arc<DeletionReconciler<S>>,
}

impl<S: EmployeeStore + 'static> AppState<S> {
    /// Wire the service layer over one upstream store and one cache.
    pub fn new(upstream: Arc<S>, cache: Arc<DirectoryCache<S>>) -> Self {
        Self {
            employees: Arc::new(EmployeeService::new(
                Arc::clone(&upstream),
                Arc::clone(&cache),
            )),
            queries: Arc::new(QueryService::new(Arc::clone(&cache))),
            reconciler: Arc::new(DeletionReconciler::new(upstream, cache)),
        }
    }
}

impl<S: EmployeeStore + 'static> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            employees: Arc::clone(&self.employees),
            queries: Arc::clone(&self.queries),
            reconciler: Arc::clone(&self.reconciler),
        }
    }
}

/// JSON body attached to error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

/// Store failure rendered as an HTTP response.
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            StoreError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Employee with ID {id} does not exist."),
            ),
            err => {
                error!("request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Employee data could not be obtained due to an upstream error.".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                status: status.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}

/// `GET /` — the whole directory.
pub async fn list_all<S: EmployeeStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.employees.list_all().await?))
}

/// `GET /search/:fragment` — substring name search.
pub async fn search_by_name<S: EmployeeStore + 'static>(
    State(state): State<AppState<S>>,
    Path(fragment): Path<String>,
) -> Result<Response, ApiError> {
    let employees = state.queries.search_by_name(&fragment).await?;
    if employees.is_empty() {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(Json(employees).into_response())
    }
}

/// `GET /:id` — one employee, straight from upstream.
pub async fn get_by_id<S: EmployeeStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.employees.get_by_id(id).await?))
}

/// `GET /highestSalary` — maximum salary, 0 when the directory is empty.
pub async fn highest_salary<S: EmployeeStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<u32>, ApiError> {
    let highest = state.queries.highest_salary().await?;
    Ok(Json(highest.unwrap_or(0)))
}

/// `GET /topTenHighestEarningEmployeeNames`.
pub async fn top_earning_names<S: EmployeeStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Response, ApiError> {
    let names = state.queries.top_earning_names(TOP_EARNER_COUNT).await?;
    if names.is_empty() {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(Json(names).into_response())
    }
}

/// `POST /` — create an employee; upstream assigns id and email.
pub async fn create<S: EmployeeStore + 'static>(
    State(state): State<AppState<S>>,
    Json(payload): Json<NewEmployee>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.employees.create(payload).await?))
}

/// `DELETE /:id` — reconciled delete-by-id.
pub async fn delete_by_id<S: EmployeeStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let outcome = state.reconciler.delete_by_id(id).await?;
    let response = match outcome {
        DeleteOutcome::Deleted => (StatusCode::OK, "Successfully Deleted").into_response(),
        DeleteOutcome::NotFound => ApiError(StoreError::NotFound(id)).into_response(),
        DeleteOutcome::NotDeleted { reason } => {
            (StatusCode::NOT_IMPLEMENTED, reason).into_response()
        }
        DeleteOutcome::Ambiguous { .. } => (
            StatusCode::NOT_IMPLEMENTED,
            "API currently does not support delete for this employee. Please reach out to App Support.",
        )
            .into_response(),
    };
    Ok(response)
}
