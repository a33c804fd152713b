//! HTTP surface of the façade.

mod handlers;

pub use handlers::{ApiError, AppState};

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tracing::info;

use crate::adapters::cache::DirectoryCache;
use crate::domain::models::Config;
use crate::domain::ports::EmployeeStore;
use crate::infrastructure::upstream::{RemoteEmployeeStore, UpstreamClientConfig};

/// Base path of the caller-facing API.
pub const API_BASE_PATH: &str = "/api/employeeDetails/v1";

/// Build the caller-facing router over any employee store.
pub fn router<S: EmployeeStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route(
            API_BASE_PATH,
            get(handlers::list_all::<S>).post(handlers::create::<S>),
        )
        .route(
            &format!("{API_BASE_PATH}/search/:fragment"),
            get(handlers::search_by_name::<S>),
        )
        .route(
            &format!("{API_BASE_PATH}/highestSalary"),
            get(handlers::highest_salary::<S>),
        )
        .route(
            &format!("{API_BASE_PATH}/topTenHighestEarningEmployeeNames"),
            get(handlers::top_earning_names::<S>),
        )
        .route(
            &format!("{API_BASE_PATH}/:id"),
            get(handlers::get_by_id::<S>).delete(handlers::delete_by_id::<S>),
        )
        .with_state(state)
}

/// Wire the full stack from configuration and serve until shutdown.
pub async fn serve(config: Config) -> Result<()> {
    let upstream = Arc::new(RemoteEmployeeStore::new(UpstreamClientConfig::from(
        &config.upstream,
    ))?);
    let cache = Arc::new(DirectoryCache::new(Arc::clone(&upstream)));
    let state = AppState::new(upstream, cache);

    let app = router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(upstream = %config.upstream.base_url, "employee directory façade listening on {addr}");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
