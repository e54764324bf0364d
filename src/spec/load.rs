use super::build::extract_records;
use super::types::{SpecDocument, HTTP_METHODS};
use crate::error::CompileError;
use crate::linter::LintIssue;
use crate::resources::{aggregate, collect_modules, compile_all, CompiledResource, ModuleOutput};
use crate::schema::{DefinitionResolver, SchemaResolver};
use anyhow::{bail, Context};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Drop everything from path items except HTTP operations and the shared
/// `parameters` block. Vendor extensions, `$ref` and free text never reach
/// the typed view.
fn strip_unknown_verbs(val: &mut serde_json::Value) {
    if let Some(serde_json::Value::Object(paths_map)) = val.get_mut("paths") {
        for item in paths_map.values_mut() {
            if let serde_json::Value::Object(obj) = item {
                obj.retain(|k, _| k == "parameters" || HTTP_METHODS.contains(&k.as_str()));
            }
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Parse a document from text. YAML when `yaml` is set, JSON otherwise.
pub fn parse_document(content: &str, yaml: bool) -> anyhow::Result<SpecDocument> {
    let mut value: serde_json::Value = if yaml {
        serde_yaml::from_str(content).context("failed to parse YAML document")?
    } else {
        serde_json::from_str(content).context("failed to parse JSON document")?
    };

    if !value.get("paths").map(|p| p.is_object()).unwrap_or(false) {
        bail!("document has no `paths` section");
    }

    strip_unknown_verbs(&mut value);
    let doc: SpecDocument =
        serde_json::from_value(value).context("document does not have the expected shape")?;
    Ok(doc)
}

/// Load a specification document (`.yaml`/`.yml` as YAML, anything else as JSON).
pub fn load_document(file_path: &Path) -> anyhow::Result<SpecDocument> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    parse_document(&content, is_yaml(file_path))
        .with_context(|| format!("failed to load {}", file_path.display()))
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompileStats {
    pub paths_seen: usize,
    pub records: usize,
    pub resources: usize,
    pub classes: usize,
}

/// Result of compiling one document
#[derive(Debug, Clone, Serialize)]
pub struct Compilation {
    /// Output modules in first-seen order
    pub modules: Vec<ModuleOutput>,
    pub resources: Vec<CompiledResource>,
    pub diagnostics: Vec<LintIssue>,
    pub stats: CompileStats,
}

impl Compilation {
    pub fn module(&self, name: &str) -> Option<&ModuleOutput> {
        self.modules.iter().find(|m| m.name == name)
    }
}

/// Run the full pipeline over a loaded document with a custom resolver.
pub fn compile_with_resolver(
    doc: &SpecDocument,
    resolver: &dyn SchemaResolver,
) -> Result<Compilation, CompileError> {
    let mut diagnostics = Vec::new();
    let records = extract_records(doc, resolver, &mut diagnostics)?;
    let record_count = records.len();
    let buckets = aggregate(records);
    let resources = compile_all(&buckets, &mut diagnostics);
    let modules = collect_modules(&resources);

    let stats = CompileStats {
        paths_seen: doc.paths.len(),
        records: record_count,
        resources: resources.len(),
        classes: modules.iter().map(|m| m.classes.len()).sum(),
    };
    info!(
        paths = stats.paths_seen,
        records = stats.records,
        buckets = buckets.len(),
        resources = stats.resources,
        modules = modules.len(),
        "Compiled resources"
    );

    Ok(Compilation {
        modules,
        resources,
        diagnostics,
        stats,
    })
}

/// Run the full pipeline, resolving schemas against the document's `definitions`.
pub fn compile_document(doc: &SpecDocument) -> Result<Compilation, CompileError> {
    compile_with_resolver(doc, &DefinitionResolver::new(&doc.definitions))
}

/// Load and compile a specification file.
pub fn compile_file(file_path: &Path) -> anyhow::Result<Compilation> {
    let doc = load_document(file_path)?;
    compile_document(&doc).with_context(|| format!("failed to compile {}", file_path.display()))
}
