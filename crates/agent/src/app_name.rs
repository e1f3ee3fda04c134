//! Application names
//!
//! Metrics roll up under one or more application names. The agent takes
//! them as a single `;`-separated string; [`AppName`] keeps them as an
//! ordered list until the call is made.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator the agent expects between multiple application names
pub const APP_NAME_SEPARATOR: &str = ";";

/// One or more application names, in rollup order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AppNameRepr", into = "AppNameRepr")]
pub struct AppName(Vec<String>);

/// TOML / JSON shape: a string or a list of strings
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AppNameRepr {
    One(String),
    Many(Vec<String>),
}

impl From<AppNameRepr> for AppName {
    fn from(repr: AppNameRepr) -> Self {
        match repr {
            AppNameRepr::One(name) => AppName(vec![name]),
            AppNameRepr::Many(names) => AppName(names),
        }
    }
}

impl From<AppName> for AppNameRepr {
    fn from(name: AppName) -> Self {
        match <[String; 1]>::try_from(name.0) {
            Ok([one]) => AppNameRepr::One(one),
            Err(names) => AppNameRepr::Many(names),
        }
    }
}

impl AppName {
    /// A single application name
    pub fn new(name: impl Into<String>) -> Self {
        AppName(vec![name.into()])
    }

    /// Several application names, primary first
    pub fn many<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AppName(names.into_iter().map(Into::into).collect())
    }

    /// The names, in order
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Whether there is no usable name
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }

    /// The form the agent takes: names joined with `;`
    pub fn joined(&self) -> String {
        self.0.join(APP_NAME_SEPARATOR)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl From<&str> for AppName {
    fn from(name: &str) -> Self {
        AppName::new(name)
    }
}

impl From<String> for AppName {
    fn from(name: String) -> Self {
        AppName::new(name)
    }
}

impl From<Vec<String>> for AppName {
    fn from(names: Vec<String>) -> Self {
        AppName(names)
    }
}

impl From<Vec<&str>> for AppName {
    fn from(names: Vec<&str>) -> Self {
        AppName::many(names)
    }
}

impl From<&[&str]> for AppName {
    fn from(names: &[&str]) -> Self {
        AppName::many(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for AppName {
    fn from(names: [&str; N]) -> Self {
        AppName::many(names)
    }
}
