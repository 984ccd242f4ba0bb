//! Endpoint descriptors: the fixed shape of one remote operation.

use std::collections::BTreeMap;
use std::fmt;

use super::arg::{Arg, PathArgs};
use crate::utils::url::encode_segment;

/// Query options every endpoint accepts.
pub const GLOBAL_OPTIONS: &[&str] = &["error_trace", "filter_path", "format", "human", "pretty"];

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an endpoint picks its HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodRule {
    Fixed(HttpMethod),
    /// `PUT` when the named path argument is present, `POST` otherwise
    PutIfPresent(&'static str),
}

/// One piece of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Literal segment
    Lit(&'static str),
    /// Required named argument
    Req(&'static str),
    /// Optional named argument, dropped when absent
    Opt(&'static str),
    /// Optional named argument that takes the given default when absent but
    /// a later argument is present, and is dropped otherwise
    OptOr(&'static str, &'static str),
}

/// Body expectation of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRule {
    None,
    Optional,
    Required,
    /// Required, newline-delimited sub-requests
    Bulk,
}

/// Immutable description of one logical remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Dotted name, e.g. `indices.create`
    pub name: &'static str,
    pub method: MethodRule,
    pub parts: &'static [Part],
    /// Recognized query option names
    pub options: &'static [&'static str],
    pub body: BodyRule,
}

impl Endpoint {
    /// Names of the required path arguments, in declared order.
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parts.iter().filter_map(|part| match part {
            Part::Req(name) => Some(*name),
            _ => None,
        })
    }

    /// Whether a query option is recognized by this endpoint.
    pub fn allows(&self, option: &str) -> bool {
        self.options.contains(&option) || GLOBAL_OPTIONS.contains(&option)
    }

    /// Resolve the HTTP method for a call.
    pub fn method_for(&self, args: &PathArgs) -> HttpMethod {
        match self.method {
            MethodRule::Fixed(method) => method,
            MethodRule::PutIfPresent(name) => {
                if args.is_present(name) {
                    HttpMethod::Put
                } else {
                    HttpMethod::Post
                }
            }
        }
    }

    /// Build the request path from the template.
    ///
    /// Absent arguments are dropped, lists are comma-joined, and every kept
    /// segment is percent-encoded. An absent [`Part::OptOr`] keeps its slot
    /// with the default when a later argument is present.
    pub fn build_path(&self, args: &PathArgs) -> String {
        let segments: Vec<String> = self
            .parts
            .iter()
            .enumerate()
            .filter_map(|(i, part)| match part {
                Part::Lit(lit) => Some(encode_segment(lit)),
                Part::Req(name) | Part::Opt(name) => {
                    args.get(name).render().map(|s| encode_segment(&s))
                }
                Part::OptOr(name, default) => match args.get(name).render() {
                    Some(s) => Some(encode_segment(&s)),
                    None if self.any_present_after(i, args) => Some(encode_segment(default)),
                    None => None,
                },
            })
            .collect();
        format!("/{}", segments.join("/"))
    }

    fn any_present_after(&self, index: usize, args: &PathArgs) -> bool {
        self.parts[index + 1..].iter().any(|part| match part {
            Part::Lit(_) => false,
            Part::Req(name) | Part::Opt(name) | Part::OptOr(name, _) => args.is_present(name),
        })
    }

    /// Template form of the path, for listings.
    pub fn template(&self) -> String {
        let segments: Vec<String> = self
            .parts
            .iter()
            .map(|part| match part {
                Part::Lit(lit) => lit.to_string(),
                Part::Req(name) => format!("{{{name}}}"),
                Part::Opt(name) => format!("[{name}]"),
                Part::OptOr(name, default) => format!("[{name}={default}]"),
            })
            .collect();
        format!("/{}", segments.join("/"))
    }
}

/// Keep only the supplied options an endpoint recognizes.
///
/// Unrecognized keys and absent values are dropped silently. Filtering an
/// already filtered map returns it unchanged.
pub fn filter_params(endpoint: &Endpoint, supplied: &BTreeMap<String, Arg>) -> BTreeMap<String, String> {
    supplied
        .iter()
        .filter(|(key, _)| endpoint.allows(key))
        .filter_map(|(key, value)| value.render().map(|v| (key.clone(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static DOC: Endpoint = Endpoint {
        name: "test.doc",
        method: MethodRule::PutIfPresent("id"),
        parts: &[Part::Req("index"), Part::Lit("_doc"), Part::Opt("id")],
        options: &["refresh", "routing"],
        body: BodyRule::Required,
    };

    #[test]
    fn test_build_path_all_present() {
        let args = PathArgs::new().with("index", "orders").with("id", "42");
        assert_eq!(DOC.build_path(&args), "/orders/_doc/42");
    }

    #[test]
    fn test_build_path_drops_absent_optional() {
        let args = PathArgs::new().with("index", "orders");
        assert_eq!(DOC.build_path(&args), "/orders/_doc");
    }

    #[test]
    fn test_build_path_keeps_explicit_empty_string() {
        let args = PathArgs::new().with("index", "orders").with("id", "");
        assert_eq!(DOC.build_path(&args), "/orders/_doc/");
    }

    #[test]
    fn test_build_path_joins_and_encodes() {
        let args = PathArgs::new()
            .with("index", vec!["a", "b"])
            .with("id", "x y");
        assert_eq!(DOC.build_path(&args), "/a,b/_doc/x%20y");
    }

    #[test]
    fn test_build_path_leading_absent() {
        static SEARCH: Endpoint = Endpoint {
            name: "test.search",
            method: MethodRule::Fixed(HttpMethod::Post),
            parts: &[Part::Opt("index"), Part::Lit("_search")],
            options: &[],
            body: BodyRule::Optional,
        };
        assert_eq!(SEARCH.build_path(&PathArgs::new()), "/_search");
    }

    #[test]
    fn test_build_path_no_parts() {
        static ROOT: Endpoint = Endpoint {
            name: "test.root",
            method: MethodRule::Fixed(HttpMethod::Head),
            parts: &[],
            options: &[],
            body: BodyRule::None,
        };
        assert_eq!(ROOT.build_path(&PathArgs::new()), "/");
    }

    #[test]
    fn test_method_for_put_if_present() {
        let with_id = PathArgs::new().with("index", "orders").with("id", "1");
        let without_id = PathArgs::new().with("index", "orders");
        assert_eq!(DOC.method_for(&with_id), HttpMethod::Put);
        assert_eq!(DOC.method_for(&without_id), HttpMethod::Post);
    }

    #[test]
    fn test_filter_params_drops_unknown() {
        let mut supplied = BTreeMap::new();
        supplied.insert("refresh".to_string(), Arg::from(true));
        supplied.insert("bogus".to_string(), Arg::from("x"));
        supplied.insert("pretty".to_string(), Arg::from(true));
        supplied.insert("routing".to_string(), Arg::Absent);

        let params = filter_params(&DOC, &supplied);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("refresh").map(String::as_str), Some("true"));
        assert_eq!(params.get("pretty").map(String::as_str), Some("true"));
        assert!(!params.contains_key("bogus"));
        assert!(!params.contains_key("routing"));
    }

    #[test]
    fn test_filter_params_idempotent() {
        let mut supplied = BTreeMap::new();
        supplied.insert("refresh".to_string(), Arg::from("wait_for"));
        supplied.insert("size".to_string(), Arg::from(10u64));

        let once = filter_params(&DOC, &supplied);
        let again: BTreeMap<String, Arg> = once
            .iter()
            .map(|(k, v)| (k.clone(), Arg::from(v.clone())))
            .collect();
        assert_eq!(filter_params(&DOC, &again), once);
    }

    static STATE: Endpoint = Endpoint {
        name: "test.state",
        method: MethodRule::Fixed(HttpMethod::Get),
        parts: &[Part::Lit("_state"), Part::OptOr("metric", "_all"), Part::Opt("index")],
        options: &[],
        body: BodyRule::None,
    };

    #[test]
    fn test_build_path_fills_default_before_present_argument() {
        let args = PathArgs::new().with("index", "orders");
        assert_eq!(STATE.build_path(&args), "/_state/_all/orders");
    }

    #[test]
    fn test_build_path_drops_trailing_defaulted_argument() {
        assert_eq!(STATE.build_path(&PathArgs::new()), "/_state");
        let args = PathArgs::new().with("metric", "nodes");
        assert_eq!(STATE.build_path(&args), "/_state/nodes");
    }

    #[test]
    fn test_template() {
        assert_eq!(DOC.template(), "/{index}/_doc/[id]");
        assert_eq!(STATE.template(), "/_state/[metric=_all]/[index]");
    }

    #[test]
    fn test_required_names() {
        assert_eq!(DOC.required().collect::<Vec<_>>(), vec!["index"]);
    }
}
