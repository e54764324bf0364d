use super::types::{
    GroupVersionKind, Operation, Parameter, ParameterEntry, PathItem, SchemaObject, SpecDocument,
};
use crate::error::CompileError;
use crate::linter::{LintIssue, LintSeverity};
use crate::resources::{classify_path, NormalizedPathRecord, PathClass, ResourceIdentity};
use crate::schema::{SchemaName, SchemaResolver};
use std::collections::BTreeSet;
use tracing::{debug, trace};

const PARAMETERS_PREFIX: &str = "#/parameters/";

/// Action that is never carried into the output
const CONNECT_ACTION: &str = "connect";

/// Parameter name that adds a synthetic `watch` action
const WATCH_PARAMETER: &str = "watch";

/// Resolve a parameter list entry to the concrete parameter
///
/// Inline entries are returned as they are; `$ref` entries must point into
/// the document's shared `parameters` table.
pub fn resolve_parameter<'a>(
    entry: &'a ParameterEntry,
    doc: &'a SpecDocument,
) -> Result<&'a Parameter, CompileError> {
    match entry {
        ParameterEntry::Inline(param) => Ok(param),
        ParameterEntry::Reference { reference } => {
            let name = reference.strip_prefix(PARAMETERS_PREFIX).ok_or_else(|| {
                CompileError::UnsupportedReference {
                    reference: reference.clone(),
                }
            })?;
            doc.parameters
                .get(name)
                .ok_or_else(|| CompileError::UnresolvedReference {
                    reference: reference.clone(),
                })
        }
    }
}

/// Resolve a `200` response schema: a reference through `resolver`, an
/// inline schema by its primitive type.
pub fn resolve_schema(
    schema: &SchemaObject,
    resolver: &dyn SchemaResolver,
) -> Result<Option<SchemaName>, CompileError> {
    if let Some(reference) = &schema.reference {
        return resolver.resolve_ref(reference).map(Some);
    }
    Ok(schema.ty.as_deref().map(SchemaName::primitive))
}

fn is_watch_parameter(entry: &ParameterEntry, doc: &SpecDocument) -> Result<bool, CompileError> {
    Ok(resolve_parameter(entry, doc)?.name == WATCH_PARAMETER)
}

/// Running state of the fold over one path's operations
#[derive(Debug, Default)]
struct Accumulator {
    verbs: Vec<String>,
    identity: Option<GroupVersionKind>,
    tags: BTreeSet<String>,
    schema: Option<SchemaName>,
    /// The schema came from a `get` or `post` operation and is final
    schema_settled: bool,
}

impl Accumulator {
    fn fold_operation(
        mut self,
        method: &str,
        op: &Operation,
        doc: &SpecDocument,
        resolver: &dyn SchemaResolver,
    ) -> Result<Self, CompileError> {
        let action = op.action.as_deref().unwrap_or(method);
        let connect = action == CONNECT_ACTION;
        if !connect {
            self.verbs.push(action.to_string());
        }

        if self.identity.is_none() {
            self.identity = op.group_version_kind.clone();
        }

        self.tags.extend(op.tags.iter().cloned());

        // Every reference is resolved; only the first watch entry adds a verb.
        let mut watched = false;
        for entry in &op.parameters {
            if is_watch_parameter(entry, doc)? && !watched {
                self.verbs.push(WATCH_PARAMETER.to_string());
                watched = true;
            }
        }

        let schema = match op.responses.get("200").and_then(|r| r.schema.as_ref()) {
            Some(schema) => resolve_schema(schema, resolver)?,
            None => None,
        };
        if connect || self.schema_settled || schema.is_none() {
            return Ok(self);
        }
        if action == "get" || action == "post" {
            self.schema = schema;
            self.schema_settled = true;
        } else if self.schema.is_none() {
            self.schema = schema;
        }

        Ok(self)
    }

    fn fold_shared_parameters(
        mut self,
        parameters: &[ParameterEntry],
        doc: &SpecDocument,
    ) -> Result<Self, CompileError> {
        for entry in parameters {
            if is_watch_parameter(entry, doc)? {
                self.verbs.push(WATCH_PARAMETER.to_string());
            }
        }
        Ok(self)
    }
}

/// Extract the normalized record for one path entry
///
/// Returns `Ok(None)` for paths outside the resource grammar, watch paths,
/// paths without a plural and paths that end up with no supported action.
/// Resolution failures are returned with the path attached.
pub fn extract_record(
    path: &str,
    item: &PathItem,
    doc: &SpecDocument,
    resolver: &dyn SchemaResolver,
    diagnostics: &mut Vec<LintIssue>,
) -> Result<Option<NormalizedPathRecord>, CompileError> {
    let matched = match classify_path(path) {
        PathClass::Resource(m) => m,
        other => {
            trace!(path, class = ?other, "Skipping non-resource path");
            return Ok(None);
        }
    };

    let acc = item
        .operations
        .iter()
        .try_fold(Accumulator::default(), |acc, (method, op)| {
            acc.fold_operation(method, op, doc, resolver)
        })
        .and_then(|acc| acc.fold_shared_parameters(&item.parameters, doc))
        .map_err(|e| e.in_path(path))?;

    if acc.verbs.is_empty() {
        debug!(path, "Skipping path without supported actions");
        return Ok(None);
    }

    if acc.tags.len() > 1 {
        let tags: Vec<&str> = acc.tags.iter().map(String::as_str).collect();
        diagnostics.push(
            LintIssue::new(
                format!("path:{}", path),
                LintSeverity::Info,
                "ambiguous_tag",
                format!(
                    "Path carries tags [{}]; using '{}' as its module",
                    tags.join(", "),
                    tags[0]
                ),
            )
            .with_suggestion("Tag every operation of a path with the same single tag"),
        );
    }

    if acc.identity.is_none() {
        debug!(path, "Path has no group/version/kind");
        if matched.sub_action.is_none() {
            diagnostics.push(LintIssue::new(
                format!("path:{}", path),
                LintSeverity::Info,
                "missing_identity",
                "No operation carries x-kubernetes-group-version-kind",
            ));
        }
    }

    Ok(Some(NormalizedPathRecord {
        path: path.to_string(),
        key: matched.key(),
        identity: acc.identity.map(ResourceIdentity::from),
        verbs: acc.verbs,
        module: acc.tags.into_iter().next(),
        schema: acc.schema,
        namespaced: matched.namespaced,
        sub_action: matched.sub_action,
    }))
}

/// Extract records for every path of the document, in document order.
pub fn extract_records(
    doc: &SpecDocument,
    resolver: &dyn SchemaResolver,
    diagnostics: &mut Vec<LintIssue>,
) -> Result<Vec<NormalizedPathRecord>, CompileError> {
    let mut records = Vec::new();
    for (path, item) in &doc.paths {
        if let Some(record) = extract_record(path, item, doc, resolver, diagnostics)? {
            records.push(record);
        }
    }
    Ok(records)
}
