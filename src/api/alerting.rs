//! Alerting plugin: monitors, destinations, and alerts.

use crate::models::HttpMethod::{Delete, Get, Post, Put};
use crate::models::MethodRule::Fixed;
use crate::models::Part::{Lit, Opt, Req};
use crate::models::{BodyRule, Endpoint};

pub static SEARCH_MONITOR: Endpoint = Endpoint {
    name: "alerting.search_monitor",
    method: Fixed(Get),
    parts: &[Lit("_plugins"), Lit("_alerting"), Lit("monitors"), Lit("_search")],
    options: &[],
    body: BodyRule::Required,
};

pub static GET_MONITOR: Endpoint = Endpoint {
    name: "alerting.get_monitor",
    method: Fixed(Get),
    parts: &[Lit("_plugins"), Lit("_alerting"), Lit("monitors"), Req("monitor_id")],
    options: &[],
    body: BodyRule::None,
};

pub static RUN_MONITOR: Endpoint = Endpoint {
    name: "alerting.run_monitor",
    method: Fixed(Post),
    parts: &[
        Lit("_plugins"),
        Lit("_alerting"),
        Lit("monitors"),
        Req("monitor_id"),
        Lit("_execute"),
    ],
    options: &["dryrun"],
    body: BodyRule::None,
};

pub static CREATE_MONITOR: Endpoint = Endpoint {
    name: "alerting.create_monitor",
    method: Fixed(Post),
    parts: &[Lit("_plugins"), Lit("_alerting"), Lit("monitors")],
    options: &[],
    body: BodyRule::Required,
};

pub static UPDATE_MONITOR: Endpoint = Endpoint {
    name: "alerting.update_monitor",
    method: Fixed(Put),
    parts: &[Lit("_plugins"), Lit("_alerting"), Lit("monitors"), Req("monitor_id")],
    options: &[],
    body: BodyRule::Required,
};

pub static DELETE_MONITOR: Endpoint = Endpoint {
    name: "alerting.delete_monitor",
    method: Fixed(Delete),
    parts: &[Lit("_plugins"), Lit("_alerting"), Lit("monitors"), Req("monitor_id")],
    options: &[],
    body: BodyRule::None,
};

/// Without `destination_id`, lists every destination.
pub static GET_DESTINATION: Endpoint = Endpoint {
    name: "alerting.get_destination",
    method: Fixed(Get),
    parts: &[
        Lit("_plugins"),
        Lit("_alerting"),
        Lit("destinations"),
        Opt("destination_id"),
    ],
    options: &[],
    body: BodyRule::None,
};

pub static CREATE_DESTINATION: Endpoint = Endpoint {
    name: "alerting.create_destination",
    method: Fixed(Post),
    parts: &[Lit("_plugins"), Lit("_alerting"), Lit("destinations")],
    options: &[],
    body: BodyRule::Required,
};

pub static UPDATE_DESTINATION: Endpoint = Endpoint {
    name: "alerting.update_destination",
    method: Fixed(Put),
    parts: &[
        Lit("_plugins"),
        Lit("_alerting"),
        Lit("destinations"),
        Req("destination_id"),
    ],
    options: &[],
    body: BodyRule::Required,
};

pub static DELETE_DESTINATION: Endpoint = Endpoint {
    name: "alerting.delete_destination",
    method: Fixed(Delete),
    parts: &[
        Lit("_plugins"),
        Lit("_alerting"),
        Lit("destinations"),
        Req("destination_id"),
    ],
    options: &[],
    body: BodyRule::None,
};

pub static GET_ALERTS: Endpoint = Endpoint {
    name: "alerting.get_alerts",
    method: Fixed(Get),
    parts: &[Lit("_plugins"), Lit("_alerting"), Lit("monitors"), Lit("alerts")],
    options: &[],
    body: BodyRule::None,
};

pub static ACKNOWLEDGE_ALERT: Endpoint = Endpoint {
    name: "alerting.acknowledge_alert",
    method: Fixed(Post),
    parts: &[
        Lit("_plugins"),
        Lit("_alerting"),
        Lit("monitors"),
        Req("monitor_id"),
        Lit("_acknowledge"),
        Lit("alerts"),
    ],
    options: &[],
    body: BodyRule::Optional,
};

pub(super) static ALL: &[&Endpoint] = &[
    &SEARCH_MONITOR,
    &GET_MONITOR,
    &RUN_MONITOR,
    &CREATE_MONITOR,
    &UPDATE_MONITOR,
    &DELETE_MONITOR,
    &GET_DESTINATION,
    &CREATE_DESTINATION,
    &UPDATE_DESTINATION,
    &DELETE_DESTINATION,
    &GET_ALERTS,
    &ACKNOWLEDGE_ALERT,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PathArgs;

    #[test]
    fn test_destination_listing_drops_missing_id() {
        assert_eq!(
            GET_DESTINATION.build_path(&PathArgs::new()),
            "/_plugins/_alerting/destinations"
        );
        assert_eq!(
            GET_DESTINATION.build_path(&PathArgs::new().with("destination_id", "d-1")),
            "/_plugins/_alerting/destinations/d-1"
        );
    }

    #[test]
    fn test_acknowledge_path() {
        let args = PathArgs::new().with("monitor_id", "m 1");
        assert_eq!(
            ACKNOWLEDGE_ALERT.build_path(&args),
            "/_plugins/_alerting/monitors/m%201/_acknowledge/alerts"
        );
    }
}
