//! Notifications plugin: channel configs and features.

use crate::models::HttpMethod::{Delete, Get, Post, Put};
use crate::models::MethodRule::Fixed;
use crate::models::Part::{Lit, Req};
use crate::models::{BodyRule, Endpoint};

pub static CREATE_CONFIG: Endpoint = Endpoint {
    name: "notifications.create_config",
    method: Fixed(Post),
    parts: &[Lit("_plugins"), Lit("_notifications"), Lit("configs")],
    options: &["source"],
    body: BodyRule::Required,
};

pub static DELETE_CONFIG: Endpoint = Endpoint {
    name: "notifications.delete_config",
    method: Fixed(Delete),
    parts: &[
        Lit("_plugins"),
        Lit("_notifications"),
        Lit("configs"),
        Req("config_id"),
    ],
    options: &["source"],
    body: BodyRule::None,
};

/// Bulk delete; ids travel as query options.
pub static DELETE_CONFIGS: Endpoint = Endpoint {
    name: "notifications.delete_configs",
    method: Fixed(Delete),
    parts: &[Lit("_plugins"), Lit("_notifications"), Lit("configs")],
    options: &["config_id", "config_id_list", "source"],
    body: BodyRule::None,
};

pub static GET_CONFIG: Endpoint = Endpoint {
    name: "notifications.get_config",
    method: Fixed(Get),
    parts: &[
        Lit("_plugins"),
        Lit("_notifications"),
        Lit("configs"),
        Req("config_id"),
    ],
    options: &["source"],
    body: BodyRule::None,
};

pub static GET_CONFIGS: Endpoint = Endpoint {
    name: "notifications.get_configs",
    method: Fixed(Get),
    parts: &[Lit("_plugins"), Lit("_notifications"), Lit("configs")],
    options: &[
        "chime.url",
        "config_type",
        "created_time_ms",
        "description",
        "email.email_account_id",
        "email.email_group_id_list",
        "email.recipient_list.recipient",
        "is_enabled",
        "last_updated_time_ms",
        "microsoft_teams.url",
        "name",
        "query",
        "ses_account.from_address",
        "ses_account.region",
        "ses_account.role_arn",
        "slack.url",
        "smtp_account.from_address",
        "smtp_account.host",
        "smtp_account.method",
        "sns.role_arn",
        "sns.topic_arn",
        "source",
        "text_query",
        "webhook.url",
    ],
    body: BodyRule::Optional,
};

pub static LIST_FEATURES: Endpoint = Endpoint {
    name: "notifications.list_features",
    method: Fixed(Get),
    parts: &[Lit("_plugins"), Lit("_notifications"), Lit("features")],
    options: &["source"],
    body: BodyRule::None,
};

pub static SEND_TEST: Endpoint = Endpoint {
    name: "notifications.send_test",
    method: Fixed(Get),
    parts: &[
        Lit("_plugins"),
        Lit("_notifications"),
        Lit("feature"),
        Lit("test"),
        Req("config_id"),
    ],
    options: &["source"],
    body: BodyRule::None,
};

pub static UPDATE_CONFIG: Endpoint = Endpoint {
    name: "notifications.update_config",
    method: Fixed(Put),
    parts: &[
        Lit("_plugins"),
        Lit("_notifications"),
        Lit("configs"),
        Req("config_id"),
    ],
    options: &["source"],
    body: BodyRule::Required,
};

pub static LIST_CHANNELS: Endpoint = Endpoint {
    name: "notifications.list_channels",
    method: Fixed(Get),
    parts: &[Lit("_plugins"), Lit("_notifications"), Lit("channels")],
    options: &["source"],
    body: BodyRule::None,
};

pub(super) static ALL: &[&Endpoint] = &[
    &CREATE_CONFIG,
    &DELETE_CONFIG,
    &DELETE_CONFIGS,
    &GET_CONFIG,
    &GET_CONFIGS,
    &LIST_FEATURES,
    &SEND_TEST,
    &UPDATE_CONFIG,
    &LIST_CHANNELS,
];
