use crate::schema::SchemaName;
use crate::spec::GroupVersionKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Bucket key: every path addressing the same plural of the same group/version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ApiKey {
    pub group: String,
    pub version: String,
    pub plural: String,
}

impl ApiKey {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        ApiKey {
            group: group.into(),
            version: version.into(),
            plural: plural.into(),
        }
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}/{}", self.version, self.plural)
        } else {
            write!(f, "{}/{}/{}", self.group, self.version, self.plural)
        }
    }
}

/// Canonical type identity of a resource, independent of its plural form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceIdentity {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl ResourceIdentity {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        ResourceIdentity {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Expression the generated class uses to reference this identity.
    pub fn definition(&self) -> String {
        format!(
            "res.ResourceDef('{}', '{}', '{}')",
            self.group, self.version, self.kind
        )
    }

    /// Module the identity belongs to when the document gives no tag:
    /// the first label of the group (`core` for the legacy group) joined
    /// with the version.
    pub fn default_module(&self) -> String {
        let group = if self.group.is_empty() {
            "core"
        } else {
            self.group.split('.').next().unwrap_or(&self.group)
        };
        format!("{}_{}", group, self.version)
    }
}

impl From<GroupVersionKind> for ResourceIdentity {
    fn from(gvk: GroupVersionKind) -> Self {
        ResourceIdentity {
            group: gvk.group,
            version: gvk.version,
            kind: gvk.kind,
        }
    }
}

/// One path entry after grammar matching and operation extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPathRecord {
    pub path: String,
    pub key: ApiKey,
    pub identity: Option<ResourceIdentity>,
    /// Effective action names in encounter order; may repeat.
    pub verbs: Vec<String>,
    /// Owning documentation tag, used as the output module.
    pub module: Option<String>,
    pub schema: Option<SchemaName>,
    pub namespaced: bool,
    pub sub_action: Option<String>,
}

impl NormalizedPathRecord {
    pub fn has_verb(&self, verb: &str) -> bool {
        self.verbs.iter().any(|v| v == verb)
    }
}

/// A sub-resource endpoint (`status`, `scale`, ...) of a compiled resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubAction {
    pub name: String,
    pub actions: Vec<String>,
    pub identity: ResourceIdentity,
    pub schema: Option<SchemaName>,
}

/// All records of one bucket merged into a single resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledResource {
    pub identity: ResourceIdentity,
    pub plural: String,
    pub module: String,
    pub schema: Option<SchemaName>,
    pub namespaced: bool,
    pub actions: Vec<String>,
    pub sub_actions: Vec<SubAction>,
}

/// Base classes a generated resource class can derive from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BaseClass {
    /// Namespaced resource that can also be listed across all namespaces
    NamespacedResourceG,
    NamespacedResource,
    GlobalResource,
    NamespacedSubResource,
    GlobalSubResource,
}

impl BaseClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseClass::NamespacedResourceG => "NamespacedResourceG",
            BaseClass::NamespacedResource => "NamespacedResource",
            BaseClass::GlobalResource => "GlobalResource",
            BaseClass::NamespacedSubResource => "NamespacedSubResource",
            BaseClass::GlobalSubResource => "GlobalSubResource",
        }
    }
}

impl std::fmt::Display for BaseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property bag attached to a generated class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassProperties {
    /// Identity reference expression
    pub resource: String,
    /// Parent identity reference expression, sub-resources only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Quoted plural literal
    pub plural: String,
    pub verbs: Vec<String>,
    /// Quoted sub-action literal, sub-resources only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Output unit of the compiler, one per generated class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub properties: ClassProperties,
    /// Capitalized sub-action name to sub-resource class name
    pub actions: BTreeMap<String, String>,
    /// Base class first, then the model mix-in when the schema has a module
    pub classes: Vec<String>,
    pub model_import: Option<String>,
}

/// The descriptors rendered into one output module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleOutput {
    pub name: String,
    pub classes: Vec<ClassDescriptor>,
    /// Sorted schema modules referenced by the classes
    pub imports: Vec<String>,
}
