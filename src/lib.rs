// src/lib.rs

//! osdispatch: descriptor-driven request dispatch for OpenSearch
//!
//! Each remote operation is an [`models::Endpoint`] in the [`api`] tables.
//! The [`dispatch::Dispatcher`] turns a descriptor plus call arguments into
//! one [`transport::Request`]; [`client::OpenSearch`] adds a small facade.

pub mod api;
pub mod client;
#[cfg(feature = "s3")]
pub mod config;
pub mod dispatch;
pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod transport;
pub mod utils;
