//! Index management endpoints.

use crate::models::HttpMethod::{Delete, Get, Head, Post, Put};
use crate::models::MethodRule::Fixed;
use crate::models::Part::{Lit, Opt, Req};
use crate::models::{BodyRule, Endpoint};

pub static CREATE: Endpoint = Endpoint {
    name: "indices.create",
    method: Fixed(Put),
    parts: &[Req("index")],
    options: &[
        "cluster_manager_timeout",
        "master_timeout",
        "timeout",
        "wait_for_active_shards",
    ],
    body: BodyRule::Optional,
};

pub static GET: Endpoint = Endpoint {
    name: "indices.get",
    method: Fixed(Get),
    parts: &[Req("index")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "flat_settings",
        "ignore_unavailable",
        "include_defaults",
        "local",
        "master_timeout",
    ],
    body: BodyRule::None,
};

pub static EXISTS: Endpoint = Endpoint {
    name: "indices.exists",
    method: Fixed(Head),
    parts: &[Req("index")],
    options: &[
        "allow_no_indices",
        "expand_wildcards",
        "flat_settings",
        "ignore_unavailable",
        "include_defaults",
        "local",
    ],
    body: BodyRule::None,
};

pub static DELETE: Endpoint = Endpoint {
    name: "indices.delete",
    method: Fixed(Delete),
    parts: &[Req("index")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "ignore_unavailable",
        "master_timeout",
        "timeout",
    ],
    body: BodyRule::None,
};

pub static REFRESH: Endpoint = Endpoint {
    name: "indices.refresh",
    method: Fixed(Post),
    parts: &[Opt("index"), Lit("_refresh")],
    options: &["allow_no_indices", "expand_wildcards", "ignore_unavailable"],
    body: BodyRule::None,
};

pub static OPEN: Endpoint = Endpoint {
    name: "indices.open",
    method: Fixed(Post),
    parts: &[Req("index"), Lit("_open")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "ignore_unavailable",
        "master_timeout",
        "timeout",
        "wait_for_active_shards",
    ],
    body: BodyRule::None,
};

pub static CLOSE: Endpoint = Endpoint {
    name: "indices.close",
    method: Fixed(Post),
    parts: &[Req("index"), Lit("_close")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "ignore_unavailable",
        "master_timeout",
        "timeout",
        "wait_for_active_shards",
    ],
    body: BodyRule::None,
};

pub static PUT_MAPPING: Endpoint = Endpoint {
    name: "indices.put_mapping",
    method: Fixed(Put),
    parts: &[Req("index"), Lit("_mapping")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "ignore_unavailable",
        "master_timeout",
        "timeout",
        "write_index_only",
    ],
    body: BodyRule::Required,
};

pub static GET_MAPPING: Endpoint = Endpoint {
    name: "indices.get_mapping",
    method: Fixed(Get),
    parts: &[Opt("index"), Lit("_mapping")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "ignore_unavailable",
        "local",
        "master_timeout",
    ],
    body: BodyRule::None,
};

pub static PUT_SETTINGS: Endpoint = Endpoint {
    name: "indices.put_settings",
    method: Fixed(Put),
    parts: &[Opt("index"), Lit("_settings")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "flat_settings",
        "ignore_unavailable",
        "master_timeout",
        "preserve_existing",
        "timeout",
    ],
    body: BodyRule::Required,
};

pub static GET_SETTINGS: Endpoint = Endpoint {
    name: "indices.get_settings",
    method: Fixed(Get),
    parts: &[Opt("index"), Lit("_settings"), Opt("name")],
    options: &[
        "allow_no_indices",
        "cluster_manager_timeout",
        "expand_wildcards",
        "flat_settings",
        "ignore_unavailable",
        "include_defaults",
        "local",
        "master_timeout",
    ],
    body: BodyRule::None,
};

pub static PUT_ALIAS: Endpoint = Endpoint {
    name: "indices.put_alias",
    method: Fixed(Put),
    parts: &[Req("index"), Lit("_alias"), Req("name")],
    options: &["cluster_manager_timeout", "master_timeout", "timeout"],
    body: BodyRule::Optional,
};

pub static GET_ALIAS: Endpoint = Endpoint {
    name: "indices.get_alias",
    method: Fixed(Get),
    parts: &[Opt("index"), Lit("_alias"), Opt("name")],
    options: &[
        "allow_no_indices",
        "expand_wildcards",
        "ignore_unavailable",
        "local",
    ],
    body: BodyRule::None,
};

pub static DELETE_ALIAS: Endpoint = Endpoint {
    name: "indices.delete_alias",
    method: Fixed(Delete),
    parts: &[Req("index"), Lit("_alias"), Req("name")],
    options: &["cluster_manager_timeout", "master_timeout", "timeout"],
    body: BodyRule::None,
};

pub static UPDATE_ALIASES: Endpoint = Endpoint {
    name: "indices.update_aliases",
    method: Fixed(Post),
    parts: &[Lit("_aliases")],
    options: &["cluster_manager_timeout", "master_timeout", "timeout"],
    body: BodyRule::Required,
};

pub static STATS: Endpoint = Endpoint {
    name: "indices.stats",
    method: Fixed(Get),
    parts: &[Opt("index"), Lit("_stats"), Opt("metric")],
    options: &[
        "completion_fields",
        "expand_wildcards",
        "fielddata_fields",
        "fields",
        "forbid_closed_indices",
        "groups",
        "include_segment_file_sizes",
        "include_unloaded_segments",
        "level",
    ],
    body: BodyRule::None,
};

pub(super) static ALL: &[&Endpoint] = &[
    &CREATE,
    &GET,
    &EXISTS,
    &DELETE,
    &REFRESH,
    &OPEN,
    &CLOSE,
    &PUT_MAPPING,
    &GET_MAPPING,
    &PUT_SETTINGS,
    &GET_SETTINGS,
    &PUT_ALIAS,
    &GET_ALIAS,
    &DELETE_ALIAS,
    &UPDATE_ALIASES,
    &STATS,
];
