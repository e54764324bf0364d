use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP verbs a path item may carry. Everything else on a path item except
/// the shared `parameters` block is pruned before the typed view is built.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Typed view over the parts of a Swagger/OpenAPI document the compiler reads.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpecDocument {
    #[serde(default)]
    pub info: Option<Info>,
    pub paths: IndexMap<String, PathItem>,
    /// Shared parameter definitions, targets of `#/parameters/<name>`.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
    /// Object schemas, targets of `#/definitions/<name>`. Kept untyped: only
    /// the keys matter for reference resolution.
    #[serde(default)]
    pub definitions: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// One entry of `paths`: operations keyed by lowercase HTTP method plus the
/// parameters shared by all of them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PathItem {
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    #[serde(flatten)]
    pub operations: IndexMap<String, Operation>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Operation {
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,
    /// Overrides the HTTP method as the action name (`list`, `deletecollection`, ...).
    #[serde(rename = "x-kubernetes-action", default)]
    pub action: Option<String>,
    #[serde(rename = "x-kubernetes-group-version-kind", default)]
    pub group_version_kind: Option<GroupVersionKind>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct GroupVersionKind {
    #[serde(default)]
    pub group: String,
    pub version: String,
    pub kind: String,
}

/// A parameter as it appears in a parameter list: inline or a pointer into
/// the document's shared `parameters` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ParameterEntry {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(Parameter),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in", default)]
    pub location: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<SchemaObject>,
}

/// The slice of a response schema the compiler needs: either a reference to
/// a definition or an inline primitive type.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemaObject {
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
}
