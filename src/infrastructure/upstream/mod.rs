//! Upstream employee store client.

mod client;
pub mod wire;

pub use client::{RemoteEmployeeStore, UpstreamClientConfig};
