//! Path grammar for resource endpoints:
//!
//! ```text
//! /api(s)?/<group>?/<version>(/watch)?(/namespaces/{namespace})?/<plural>(/{name}(/<subaction>)?)?
//! ```
//!
//! Only the start of the path is anchored. Anything after the sub-action
//! segment (`/pods/{name}/proxy/{path}`) is ignored.

use super::types::ApiKey;
use once_cell::sync::Lazy;
use regex::Regex;

static RESOURCE_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^/apis?(?P<group>/.*?)?/(?P<version>v[^/]*)(?P<watch>/watch)?",
        r"(?P<ns>/namespaces/\{namespace\})?/(?P<plural>[^/]*)",
        r"(?:/\{name\}(?P<action>/[^/]*)?)?",
    ))
    .expect("resource path regex should be valid")
});

/// Named captures of a grammar match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    /// API group without the leading separator; empty for the legacy `/api` group
    pub group: String,
    pub version: String,
    pub watch: bool,
    pub namespaced: bool,
    pub plural: String,
    /// Sub-resource name without the leading separator
    pub sub_action: Option<String>,
}

impl PathMatch {
    pub fn key(&self) -> ApiKey {
        ApiKey::new(&self.group, &self.version, &self.plural)
    }
}

/// What the grammar makes of a raw path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathClass {
    /// Not an API resource path
    NoMatch,
    /// Deprecated `/watch/` endpoint
    Watch,
    /// Matches but names no plural (e.g. `/apis/apps/v1/`)
    NoPlural,
    Resource(PathMatch),
}

/// Match `path` against the grammar and return its raw captures.
pub fn match_path(path: &str) -> Option<PathMatch> {
    let caps = RESOURCE_PATH_REGEX.captures(path)?;
    let group = caps
        .name("group")
        .map(|m| m.as_str().trim_start_matches('/').to_string())
        .unwrap_or_default();
    let version = caps.name("version")?.as_str().to_string();
    let plural = caps
        .name("plural")
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let sub_action = caps
        .name("action")
        .map(|m| m.as_str().trim_start_matches('/').to_string());
    Some(PathMatch {
        group,
        version,
        watch: caps.name("watch").is_some(),
        namespaced: caps.name("ns").is_some(),
        plural,
        sub_action,
    })
}

/// Match `path` and apply the discard rules: watch endpoints and paths
/// without a plural never describe a resource.
pub fn classify_path(path: &str) -> PathClass {
    match match_path(path) {
        None => PathClass::NoMatch,
        Some(m) if m.watch => PathClass::Watch,
        Some(m) if m.plural.is_empty() => PathClass::NoPlural,
        Some(m) => PathClass::Resource(m),
    }
}
