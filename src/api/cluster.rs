//! Cluster-level endpoints.

use crate::models::HttpMethod::{Get, Put};
use crate::models::MethodRule::Fixed;
use crate::models::Part::{Lit, Opt, OptOr};
use crate::models::{BodyRule, Endpoint};

pub static HEALTH: Endpoint = Endpoint {
    name: "cluster.health",
    method: Fixed(Get),
    parts: &[Lit("_cluster"), Lit("health"), Opt("index")],
    options: &[
        "awareness_attribute",
        "cluster_manager_timeout",
        "expand_wildcards",
        "level",
        "local",
        "master_timeout",
        "timeout",
        "wait_for_active_shards",
        "wait_for_events",
        "wait_for_no_initializing_shards",
        "wait_for_no_relocating_shards",
        "wait_for_nodes",
        "wait_for_status",
    ],
    body: BodyRule::None,
};

/// An index without a metric reads every metric: `/_cluster/state/_all/{index}`.
pub static STATE: Endpoint = Endpoint {
    name: "cluster.state",
    method: Fixed(Get),
    parts: &[Lit("_cluster"), Lit("state"), OptOr("metric", "_all"), Opt("index")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "flat_settings",
        "ignore_unavailable",
        "local",
        "master_timeout",
        "wait_for_metadata_version",
        "wait_for_timeout",
    ],
    body: BodyRule::None,
};

pub static STATS: Endpoint = Endpoint {
    name: "cluster.stats",
    method: Fixed(Get),
    parts: &[Lit("_cluster"), Lit("stats")],
    options: &["flat_settings", "timeout"],
    body: BodyRule::None,
};

pub static GET_SETTINGS: Endpoint = Endpoint {
    name: "cluster.get_settings",
    method: Fixed(Get),
    parts: &[Lit("_cluster"), Lit("settings")],
    options: &[
        "cluster_manager_timeout",
        "flat_settings",
        "include_defaults",
        "master_timeout",
        "timeout",
    ],
    body: BodyRule::None,
};

pub static PUT_SETTINGS: Endpoint = Endpoint {
    name: "cluster.put_settings",
    method: Fixed(Put),
    parts: &[Lit("_cluster"), Lit("settings")],
    options: &[
        "cluster_manager_timeout",
        "flat_settings",
        "master_timeout",
        "timeout",
    ],
    body: BodyRule::Required,
};

pub(super) static ALL: &[&Endpoint] = &[&HEALTH, &STATE, &STATS, &GET_SETTINGS, &PUT_SETTINGS];
