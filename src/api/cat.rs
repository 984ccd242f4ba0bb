//! Compact, human-readable `_cat` endpoints.

use crate::models::HttpMethod::Get;
use crate::models::MethodRule::Fixed;
use crate::models::Part::{Lit, Opt};
use crate::models::{BodyRule, Endpoint};

pub static ALIASES: Endpoint = Endpoint {
    name: "cat.aliases",
    method: Fixed(Get),
    parts: &[Lit("_cat"), Lit("aliases"), Opt("name")],
    options: &["expand_wildcards", "h", "help", "local", "s", "v"],
    body: BodyRule::None,
};

pub static COUNT: Endpoint = Endpoint {
    name: "cat.count",
    method: Fixed(Get),
    parts: &[Lit("_cat"), Lit("count"), Opt("index")],
    options: &["h", "help", "s", "v"],
    body: BodyRule::None,
};

pub static HEALTH: Endpoint = Endpoint {
    name: "cat.health",
    method: Fixed(Get),
    parts: &[Lit("_cat"), Lit("health")],
    options: &["h", "help", "s", "time", "ts", "v"],
    body: BodyRule::None,
};

pub static INDICES: Endpoint = Endpoint {
    name: "cat.indices",
    method: Fixed(Get),
    parts: &[Lit("_cat"), Lit("indices"), Opt("index")],
    options: &[
        "bytes",
        "cluster_manager_timeout",
        "expand_wildcards",
        "h",
        "health",
        "help",
        "include_unloaded_segments",
        "local",
        "master_timeout",
        "pri",
        "s",
        "time",
        "v",
    ],
    body: BodyRule::None,
};

pub static NODES: Endpoint = Endpoint {
    name: "cat.nodes",
    method: Fixed(Get),
    parts: &[Lit("_cat"), Lit("nodes")],
    options: &[
        "bytes",
        "cluster_manager_timeout",
        "full_id",
        "h",
        "help",
        "local",
        "master_timeout",
        "s",
        "time",
        "v",
    ],
    body: BodyRule::None,
};

pub static SHARDS: Endpoint = Endpoint {
    name: "cat.shards",
    method: Fixed(Get),
    parts: &[Lit("_cat"), Lit("shards"), Opt("index")],
    options: &[
        "bytes",
        "cluster_manager_timeout",
        "h",
        "help",
        "local",
        "master_timeout",
        "s",
        "time",
        "v",
    ],
    body: BodyRule::None,
};

pub(super) static ALL: &[&Endpoint] = &[&ALIASES, &COUNT, &HEALTH, &INDICES, &NODES, &SHARDS];
