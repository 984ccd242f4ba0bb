// src/models/mod.rs

//! Domain models for the dispatch layer.
//!
//! Descriptors, argument values, and bodies are plain data; configuration
//! lives alongside them.

mod arg;
mod body;
mod config;
mod endpoint;

// Re-export all public types
pub use arg::{Arg, PathArgs};
pub use body::{Body, BulkPart, bulk_body};
pub use config::{Config, LoggingConfig, TransportConfig};
pub use endpoint::{
    BodyRule, Endpoint, GLOBAL_OPTIONS, HttpMethod, MethodRule, Part, filter_params,
};
