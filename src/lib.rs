//! Roster — employee directory façade.
//!
//! Exposes employee records to callers while delegating storage to a
//! remote, rate-limited, occasionally failing employee store. The remote
//! collection is cached whole (one snapshot, whole-collection
//! invalidation); deletes are reconciled from identifier to name before any
//! destructive call is issued.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **Domain** (`domain`): models, the `EmployeeStore` port, and the
//!   classified error taxonomy
//! - **Services** (`services`): query engine, deletion reconciler, and
//!   caller-facing employee operations
//! - **Adapters** (`adapters`): the single-flight directory cache
//! - **Infrastructure** (`infrastructure`): reqwest upstream client,
//!   figment configuration, tracing setup, and the axum HTTP surface

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::DirectoryCache;
pub use domain::errors::{StoreError, StoreResult};
pub use domain::models::{
    Config, DeleteOutcome, DirectorySnapshot, Employee, LoggingConfig, NewEmployee, ServerConfig,
    UpstreamConfig,
};
pub use domain::ports::EmployeeStore;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::upstream::{RemoteEmployeeStore, UpstreamClientConfig};
pub use services::{DeletionReconciler, EmployeeService, QueryService};
