//! Infrastructure layer: upstream client, configuration, logging, HTTP.

pub mod config;
pub mod http;
pub mod logging;
pub mod upstream;
