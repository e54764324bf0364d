use super::types::{ApiKey, CompiledResource, NormalizedPathRecord, SubAction};
use crate::linter::{LintIssue, LintSeverity};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Prefix for primary actions only reachable through a cluster-scoped path
/// of an otherwise namespaced resource.
pub const GLOBAL_PREFIX: &str = "global_";

fn sorted_unique<'a>(verbs: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    verbs
        .into_iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Merge all records of one bucket into a single resource.
///
/// Returns `None` when no primary record carries an identity; the bucket is
/// then dropped and an `unidentified_resource` warning naming its first path
/// is pushed onto `diagnostics`.
pub fn compile_one(
    key: &ApiKey,
    records: &[NormalizedPathRecord],
    diagnostics: &mut Vec<LintIssue>,
) -> Option<CompiledResource> {
    let namespaced = records.iter().any(|r| r.namespaced);

    let identity = records
        .iter()
        .filter(|r| r.sub_action.is_none())
        .find_map(|r| r.identity.clone());
    let Some(identity) = identity else {
        let first_path = records.first().map(|r| r.path.as_str()).unwrap_or_default();
        warn!(
            key = %key,
            path = first_path,
            paths = records.len(),
            "Dropping resource without group/version/kind"
        );
        diagnostics.push(
            LintIssue::new(
                format!("path:{}", first_path),
                LintSeverity::Warning,
                "unidentified_resource",
                format!(
                    "No group/version/kind for '{}'; {} path(s) dropped",
                    key,
                    records.len()
                ),
            )
            .with_suggestion("Add x-kubernetes-group-version-kind to an operation of the primary path"),
        );
        return None;
    };

    let module = records
        .iter()
        .find_map(|r| r.module.clone())
        .unwrap_or_else(|| identity.default_module());

    let schema = records
        .iter()
        .find(|r| r.sub_action.is_none() && (r.has_verb("get") || r.has_verb("post")))
        .and_then(|r| r.schema.clone());

    let mut actions: BTreeSet<String> = BTreeSet::new();
    let mut sub_actions: Vec<SubAction> = Vec::new();
    for record in records {
        match &record.sub_action {
            Some(name) => match sub_actions.iter_mut().find(|s| &s.name == name) {
                Some(existing) => {
                    existing.actions = sorted_unique(existing.actions.iter().chain(&record.verbs));
                    if existing.schema.is_none() {
                        existing.schema = record.schema.clone();
                    }
                }
                None => sub_actions.push(SubAction {
                    name: name.clone(),
                    actions: sorted_unique(&record.verbs),
                    identity: record.identity.clone().unwrap_or_else(|| identity.clone()),
                    schema: record.schema.clone(),
                }),
            },
            None if namespaced && !record.namespaced => {
                actions.extend(record.verbs.iter().map(|v| format!("{}{}", GLOBAL_PREFIX, v)));
            }
            None => actions.extend(record.verbs.iter().cloned()),
        }
    }

    debug!(
        key = %key,
        kind = %identity.kind,
        module = %module,
        namespaced,
        sub_actions = sub_actions.len(),
        "Compiled resource"
    );

    Some(CompiledResource {
        identity,
        plural: key.plural.clone(),
        module,
        schema,
        namespaced,
        actions: actions.into_iter().collect(),
        sub_actions,
    })
}

/// Compile every bucket in order, skipping the ones without identity.
pub fn compile_all(
    buckets: &IndexMap<ApiKey, Vec<NormalizedPathRecord>>,
    diagnostics: &mut Vec<LintIssue>,
) -> Vec<CompiledResource> {
    buckets
        .iter()
        .filter_map(|(key, records)| compile_one(key, records, diagnostics))
        .collect()
}
