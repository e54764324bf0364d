use anyhow::Context;
use minijinja::Environment;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::config::GeneratorConfig;
use super::templates::render_module;
use crate::resources::ModuleOutput;
use crate::spec::Compilation;

/// Where and how rendered modules are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub resources_dir: String,
    /// Package the smoke-test file imports resource modules from
    pub package: String,
    /// Remove the resources directory of a previous run first
    pub clean: bool,
    pub test_file: Option<PathBuf>,
    /// Render everything but write nothing
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn from_config(output_dir: impl Into<PathBuf>, config: &GeneratorConfig) -> Self {
        GenerateOptions {
            output_dir: output_dir.into(),
            resources_dir: config.resources_dir.clone(),
            package: config.package.clone(),
            clean: config.clean,
            test_file: config.test_file.clone(),
            dry_run: false,
        }
    }

    /// `<output_dir>/<resources_dir>`
    pub fn resources_path(&self) -> PathBuf {
        self.output_dir.join(&self.resources_dir)
    }
}

/// One rendered module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub name: String,
    pub path: PathBuf,
    pub classes: usize,
}

/// What a generation run produced (or would produce on a dry run)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub modules: Vec<GeneratedModule>,
    pub test_file: Option<PathBuf>,
}

/// Contents of the import smoke-test file: one import line per module.
pub fn smoke_test_contents(package: &str, resources_dir: &str, modules: &[ModuleOutput]) -> String {
    modules
        .iter()
        .map(|m| format!("from {}.{} import {}\n", package, resources_dir, m.name))
        .collect()
}

fn prepare_resources_dir(dir: &Path, clean: bool) -> anyhow::Result<()> {
    if clean && dir.exists() {
        debug!(dir = %dir.display(), "Removing previous resources directory");
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory for {}", path.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Render every module of `compilation` and write one `<module>.py` per
/// module under the resources directory, then the optional smoke-test file.
pub fn generate_resources(
    compilation: &Compilation,
    env: &Environment<'_>,
    options: &GenerateOptions,
) -> anyhow::Result<GenerationReport> {
    let resources_path = options.resources_path();
    if !options.dry_run {
        prepare_resources_dir(&resources_path, options.clean)?;
    }

    let mut report = GenerationReport::default();
    for module in &compilation.modules {
        let rendered = render_module(env, module)?;
        let path = resources_path.join(format!("{}.py", module.name));
        if options.dry_run {
            println!(
                "📝 Would write {} ({} resources)",
                path.display(),
                module.classes.len()
            );
        } else {
            write_file(&path, &rendered)?;
            println!(
                "✅ Generated {} with {} resources",
                path.display(),
                module.classes.len()
            );
        }
        info!(
            module = %module.name,
            classes = module.classes.len(),
            path = %path.display(),
            dry_run = options.dry_run,
            "Rendered resource module"
        );
        report.modules.push(GeneratedModule {
            name: module.name.clone(),
            path,
            classes: module.classes.len(),
        });
    }

    if let Some(test_file) = &options.test_file {
        let contents = smoke_test_contents(
            &options.package,
            &options.resources_dir,
            &compilation.modules,
        );
        if options.dry_run {
            println!("📝 Would write {}", test_file.display());
        } else {
            write_file(test_file, &contents)?;
            println!("✅ Generated {}", test_file.display());
        }
        report.test_file = Some(test_file.clone());
    }

    Ok(report)
}
