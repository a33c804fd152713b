//! Adapters layered between the domain and infrastructure.

pub mod cache;
