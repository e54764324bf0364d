//! # Schema Names
//!
//! Maps definition references from the document onto the module/type pair
//! the generated model code lives under:
//!
//! ```text
//! #/definitions/io.k8s.api.core.v1.Pod                       -> core_v1.Pod
//! #/definitions/io.k8s.apimachinery.pkg.apis.meta.v1.Status  -> meta_v1.Status
//! #/definitions/io.k8s.apimachinery.pkg.api.resource.Quantity -> resource.Quantity
//! ```
//!
//! The model compiler that turns definitions into field lists is a separate
//! concern; resource compilation only needs this naming contract to point
//! each generated class at its model type.

use crate::error::CompileError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Everything up to and including the last `.api.`, `.apis.` or `.pkg.` segment.
static MODEL_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*[.](apis?|pkg)[.]").expect("model prefix regex should be valid")
});

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// A resolved schema: the type name plus the module that owns it.
///
/// Inline primitive schemas (`type: string`) have no module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SchemaName {
    pub name: String,
    pub module: Option<String>,
}

impl SchemaName {
    pub fn primitive(ty: impl Into<String>) -> Self {
        SchemaName {
            name: ty.into(),
            module: None,
        }
    }

    /// `module.Type`, or `None` for primitives.
    pub fn full_name(&self) -> Option<String> {
        self.module
            .as_ref()
            .map(|module| format!("{}.{}", module, self.name))
    }
}

/// Split a definition name such as `io.k8s.api.apps.v1.Deployment` into
/// module `apps_v1` and type `Deployment`.
pub fn schema_name(definition: &str) -> Result<SchemaName, CompileError> {
    let stripped = MODEL_PREFIX_REGEX.replace(definition, "");
    let parts: Vec<&str> = stripped.split('.').collect();
    let (module, name) = match parts.as_slice() {
        [module, version, name] => (format!("{}_{}", module, version), *name),
        [module, name] => (module.to_string(), *name),
        [name] => (name.to_string(), *name),
        _ => {
            return Err(CompileError::MalformedSchemaName {
                name: definition.to_string(),
            })
        }
    };
    if name.is_empty() || module.is_empty() {
        return Err(CompileError::MalformedSchemaName {
            name: definition.to_string(),
        });
    }
    Ok(SchemaName {
        name: name.to_string(),
        module: Some(module),
    })
}

/// Resolves a schema reference to its module and type name.
pub trait SchemaResolver {
    fn resolve_ref(&self, reference: &str) -> Result<SchemaName, CompileError>;
}

/// Resolver over the document's `definitions` table.
///
/// An empty table disables the existence check so that trimmed documents
/// (paths only) still compile.
pub struct DefinitionResolver<'a> {
    definitions: &'a IndexMap<String, Value>,
}

impl<'a> DefinitionResolver<'a> {
    pub fn new(definitions: &'a IndexMap<String, Value>) -> Self {
        Self { definitions }
    }
}

impl SchemaResolver for DefinitionResolver<'_> {
    fn resolve_ref(&self, reference: &str) -> Result<SchemaName, CompileError> {
        let name = reference.strip_prefix(DEFINITIONS_PREFIX).ok_or_else(|| {
            CompileError::UnsupportedReference {
                reference: reference.to_string(),
            }
        })?;
        if !self.definitions.is_empty() && !self.definitions.contains_key(name) {
            return Err(CompileError::UnresolvedReference {
                reference: reference.to_string(),
            });
        }
        schema_name(name)
    }
}
