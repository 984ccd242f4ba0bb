//! Caller-supplied argument values for path segments and query options.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone};

/// A value supplied for a path segment or query option.
///
/// `Absent` means the caller supplied nothing. It is distinct from an empty
/// string, which is a value like any other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Arg {
    #[default]
    Absent,
    Single(String),
    List(Vec<String>),
}

impl Arg {
    pub fn is_absent(&self) -> bool {
        matches!(self, Arg::Absent)
    }

    /// True when the value is absent or carries no content.
    ///
    /// Required arguments must not be blank. A list whose items are all empty
    /// is blank too.
    pub fn is_blank(&self) -> bool {
        match self {
            Arg::Absent => true,
            Arg::Single(s) => s.is_empty(),
            Arg::List(items) => items.iter().all(String::is_empty),
        }
    }

    /// Render to the wire form: lists are comma-joined.
    ///
    /// Returns `None` for `Absent`.
    pub fn render(&self) -> Option<String> {
        match self {
            Arg::Absent => None,
            Arg::Single(s) => Some(s.clone()),
            Arg::List(items) => Some(items.join(",")),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Single(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Single(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Single(value.clone())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Single(if value { "true" } else { "false" }.to_string())
    }
}

macro_rules! arg_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::Single(value.to_string())
                }
            }
        )*
    };
}

arg_from_number!(i32, i64, u16, u32, u64, usize, f64);

impl From<NaiveDate> for Arg {
    fn from(value: NaiveDate) -> Self {
        Arg::Single(value.format("%Y-%m-%d").to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Arg
where
    Tz::Offset: std::fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Arg::Single(value.to_rfc3339())
    }
}

impl<T: Into<String>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Absent, Into::into)
    }
}

/// Named path arguments for one call. Names not present are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    values: BTreeMap<String, Arg>,
}

impl PathArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named argument, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Arg>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a named argument; missing names read as `Absent`.
    pub fn get(&self, name: &str) -> &Arg {
        static ABSENT: Arg = Arg::Absent;
        self.values.get(name).unwrap_or(&ABSENT)
    }

    pub fn is_present(&self, name: &str) -> bool {
        !self.get(name).is_absent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_absent_and_empty_are_distinct() {
        assert!(Arg::Absent.is_absent());
        assert!(!Arg::from("").is_absent());
        assert!(Arg::from("").is_blank());
        assert!(Arg::Absent.is_blank());
        assert!(!Arg::from("orders").is_blank());
    }

    #[test]
    fn test_list_renders_comma_joined() {
        assert_eq!(Arg::from(vec!["a", "b"]).render(), Some("a,b".to_string()));
        assert!(Arg::from(Vec::<String>::new()).is_blank());
    }

    #[test]
    fn test_list_of_empty_items_is_blank() {
        assert!(Arg::from(vec![""]).is_blank());
        assert!(Arg::from(vec!["", ""]).is_blank());
        assert!(!Arg::from(vec!["", "b"]).is_blank());
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Arg::from(true).render(), Some("true".to_string()));
        assert_eq!(Arg::from(false).render(), Some("false".to_string()));
        assert_eq!(Arg::from(42u64).render(), Some("42".to_string()));
        assert_eq!(Arg::from(Option::<&str>::None), Arg::Absent);
        assert_eq!(Arg::from(Some("x")), Arg::Single("x".to_string()));
    }

    #[test]
    fn test_date_conversions() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Arg::from(day).render(), Some("2024-03-09".to_string()));

        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap();
        assert_eq!(
            Arg::from(ts).render(),
            Some("2024-03-09T12:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_path_args_missing_reads_absent() {
        let args = PathArgs::new().with("index", "orders");
        assert_eq!(args.get("index"), &Arg::from("orders"));
        assert!(args.get("id").is_absent());
        assert!(!args.is_present("id"));
    }
}
