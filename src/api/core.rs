//! Document, search, and cluster-root endpoints.

use crate::models::BodyRule;
use crate::models::Endpoint;
use crate::models::HttpMethod::{Delete, Get, Head, Post, Put};
use crate::models::MethodRule::{Fixed, PutIfPresent};
use crate::models::Part::{Lit, Opt, Req};

/// Liveness check against the cluster root.
pub static PING: Endpoint = Endpoint {
    name: "ping",
    method: Fixed(Head),
    parts: &[],
    options: &[],
    body: BodyRule::None,
};

pub static INFO: Endpoint = Endpoint {
    name: "info",
    method: Fixed(Get),
    parts: &[],
    options: &[],
    body: BodyRule::None,
};

pub static GET: Endpoint = Endpoint {
    name: "get",
    method: Fixed(Get),
    parts: &[Req("index"), Lit("_doc"), Req("id")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "preference",
        "realtime",
        "refresh",
        "routing",
        "stored_fields",
        "version",
        "version_type",
    ],
    body: BodyRule::None,
};

pub static EXISTS: Endpoint = Endpoint {
    name: "exists",
    method: Fixed(Head),
    parts: &[Req("index"), Lit("_doc"), Req("id")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "preference",
        "realtime",
        "refresh",
        "routing",
        "stored_fields",
        "version",
        "version_type",
    ],
    body: BodyRule::None,
};

pub static GET_SOURCE: Endpoint = Endpoint {
    name: "get_source",
    method: Fixed(Get),
    parts: &[Req("index"), Lit("_source"), Req("id")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "preference",
        "realtime",
        "refresh",
        "routing",
        "version",
        "version_type",
    ],
    body: BodyRule::None,
};

/// Create or replace a document; `POST` without an id, `PUT` with one.
pub static INDEX: Endpoint = Endpoint {
    name: "index",
    method: PutIfPresent("id"),
    parts: &[Req("index"), Lit("_doc"), Opt("id")],
    options: &[
        "if_primary_term",
        "if_seq_no",
        "op_type",
        "pipeline",
        "refresh",
        "require_alias",
        "routing",
        "timeout",
        "version",
        "version_type",
        "wait_for_active_shards",
    ],
    body: BodyRule::Required,
};

pub static CREATE: Endpoint = Endpoint {
    name: "create",
    method: Fixed(Put),
    parts: &[Req("index"), Lit("_create"), Req("id")],
    options: &[
        "pipeline",
        "refresh",
        "routing",
        "timeout",
        "version",
        "version_type",
        "wait_for_active_shards",
    ],
    body: BodyRule::Required,
};

pub static UPDATE: Endpoint = Endpoint {
    name: "update",
    method: Fixed(Post),
    parts: &[Req("index"), Lit("_update"), Req("id")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "if_primary_term",
        "if_seq_no",
        "lang",
        "refresh",
        "require_alias",
        "retry_on_conflict",
        "routing",
        "timeout",
        "wait_for_active_shards",
    ],
    body: BodyRule::Required,
};

pub static DELETE: Endpoint = Endpoint {
    name: "delete",
    method: Fixed(Delete),
    parts: &[Req("index"), Lit("_doc"), Req("id")],
    options: &[
        "if_primary_term",
        "if_seq_no",
        "refresh",
        "routing",
        "timeout",
        "version",
        "version_type",
        "wait_for_active_shards",
    ],
    body: BodyRule::None,
};

pub static SEARCH: Endpoint = Endpoint {
    name: "search",
    method: Fixed(Post),
    parts: &[Opt("index"), Lit("_search")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "allow_no_indices",
        "allow_partial_search_results",
        "analyze_wildcard",
        "analyzer",
        "batched_reduce_size",
        "ccs_minimize_roundtrips",
        "default_operator",
        "df",
        "docvalue_fields",
        "expand_wildcards",
        "explain",
        "from",
        "ignore_throttled",
        "ignore_unavailable",
        "lenient",
        "max_concurrent_shard_requests",
        "pre_filter_shard_size",
        "preference",
        "q",
        "request_cache",
        "rest_total_hits_as_int",
        "routing",
        "scroll",
        "search_pipeline",
        "search_type",
        "seq_no_primary_term",
        "size",
        "sort",
        "stats",
        "stored_fields",
        "terminate_after",
        "timeout",
        "track_scores",
        "track_total_hits",
        "typed_keys",
        "version",
    ],
    body: BodyRule::Optional,
};

pub static COUNT: Endpoint = Endpoint {
    name: "count",
    method: Fixed(Post),
    parts: &[Opt("index"), Lit("_count")],
    options: &[
        "allow_no_indices",
        "analyze_wildcard",
        "analyzer",
        "default_operator",
        "df",
        "expand_wildcards",
        "ignore_throttled",
        "ignore_unavailable",
        "lenient",
        "min_score",
        "preference",
        "q",
        "routing",
        "terminate_after",
    ],
    body: BodyRule::Optional,
};

pub static MGET: Endpoint = Endpoint {
    name: "mget",
    method: Fixed(Post),
    parts: &[Opt("index"), Lit("_mget")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "preference",
        "realtime",
        "refresh",
        "routing",
        "stored_fields",
    ],
    body: BodyRule::Required,
};

/// Newline-delimited index/create/update/delete actions.
pub static BULK: Endpoint = Endpoint {
    name: "bulk",
    method: Fixed(Post),
    parts: &[Opt("index"), Lit("_bulk")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "pipeline",
        "refresh",
        "require_alias",
        "routing",
        "timeout",
        "wait_for_active_shards",
    ],
    body: BodyRule::Bulk,
};

/// Newline-delimited header/body search pairs.
pub static MSEARCH: Endpoint = Endpoint {
    name: "msearch",
    method: Fixed(Post),
    parts: &[Opt("index"), Lit("_msearch")],
    options: &[
        "ccs_minimize_roundtrips",
        "max_concurrent_searches",
        "max_concurrent_shard_requests",
        "pre_filter_shard_size",
        "rest_total_hits_as_int",
        "search_type",
        "typed_keys",
    ],
    body: BodyRule::Bulk,
};

pub static MSEARCH_TEMPLATE: Endpoint = Endpoint {
    name: "msearch_template",
    method: Fixed(Post),
    parts: &[Opt("index"), Lit("_msearch"), Lit("template")],
    options: &[
        "ccs_minimize_roundtrips",
        "max_concurrent_searches",
        "rest_total_hits_as_int",
        "search_type",
        "typed_keys",
    ],
    body: BodyRule::Bulk,
};

pub static DELETE_BY_QUERY: Endpoint = Endpoint {
    name: "delete_by_query",
    method: Fixed(Post),
    parts: &[Req("index"), Lit("_delete_by_query")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "allow_no_indices",
        "conflicts",
        "expand_wildcards",
        "from",
        "ignore_unavailable",
        "max_docs",
        "q",
        "refresh",
        "requests_per_second",
        "routing",
        "scroll",
        "scroll_size",
        "slices",
        "timeout",
        "wait_for_active_shards",
        "wait_for_completion",
    ],
    body: BodyRule::Required,
};

pub static UPDATE_BY_QUERY: Endpoint = Endpoint {
    name: "update_by_query",
    method: Fixed(Post),
    parts: &[Req("index"), Lit("_update_by_query")],
    options: &[
        "_source",
        "_source_excludes",
        "_source_includes",
        "allow_no_indices",
        "conflicts",
        "expand_wildcards",
        "from",
        "ignore_unavailable",
        "max_docs",
        "pipeline",
        "q",
        "refresh",
        "requests_per_second",
        "routing",
        "scroll",
        "scroll_size",
        "slices",
        "timeout",
        "wait_for_active_shards",
        "wait_for_completion",
    ],
    body: BodyRule::Optional,
};

pub static REINDEX: Endpoint = Endpoint {
    name: "reindex",
    method: Fixed(Post),
    parts: &[Lit("_reindex")],
    options: &[
        "max_docs",
        "refresh",
        "requests_per_second",
        "scroll",
        "slices",
        "timeout",
        "wait_for_active_shards",
        "wait_for_completion",
    ],
    body: BodyRule::Required,
};

/// The scroll id travels in the body, or as the `scroll_id` option.
pub static SCROLL: Endpoint = Endpoint {
    name: "scroll",
    method: Fixed(Post),
    parts: &[Lit("_search"), Lit("scroll")],
    options: &["rest_total_hits_as_int", "scroll", "scroll_id"],
    body: BodyRule::Optional,
};

pub static CLEAR_SCROLL: Endpoint = Endpoint {
    name: "clear_scroll",
    method: Fixed(Delete),
    parts: &[Lit("_search"), Lit("scroll")],
    options: &["scroll_id"],
    body: BodyRule::Optional,
};

pub(super) static ALL: &[&Endpoint] = &[
    &PING,
    &INFO,
    &GET,
    &EXISTS,
    &GET_SOURCE,
    &INDEX,
    &CREATE,
    &UPDATE,
    &DELETE,
    &SEARCH,
    &COUNT,
    &MGET,
    &BULK,
    &MSEARCH,
    &MSEARCH_TEMPLATE,
    &DELETE_BY_QUERY,
    &UPDATE_BY_QUERY,
    &REINDEX,
    &SCROLL,
    &CLEAR_SCROLL,
];
