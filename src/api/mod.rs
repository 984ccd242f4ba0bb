//! Endpoint descriptor tables, grouped by API family.
//!
//! Every descriptor is a `static`; the registry below is the only place
//! that enumerates them, and lookups by dotted name go through [`find`].

pub mod alerting;
pub mod cat;
pub mod cluster;
pub mod core;
pub mod indices;
pub mod notifications;

use crate::models::Endpoint;

/// Every known family table, in listing order.
static FAMILIES: &[&[&Endpoint]] = &[
    core::ALL,
    indices::ALL,
    cat::ALL,
    cluster::ALL,
    alerting::ALL,
    notifications::ALL,
];

/// Iterate over every registered endpoint.
pub fn endpoints() -> impl Iterator<Item = &'static Endpoint> {
    FAMILIES.iter().flat_map(|family| family.iter().copied())
}

/// Look up an endpoint by its dotted name, e.g. `indices.create`.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    endpoints().find(|endpoint| endpoint.name == name)
}
