use anyhow::Context;
use minijinja::{context, Environment};
use std::path::Path;

use crate::resources::ModuleOutput;

/// Name the resources template is registered under. The `.py` suffix keeps
/// minijinja's auto-escaping off.
pub const RESOURCES_TEMPLATE: &str = "resources.py";

/// Built-in template producing one Python module of resource classes
pub const DEFAULT_RESOURCES_TEMPLATE: &str = include_str!("../../templates/resources.py.j2");

/// Read the template source: the file at `override_path`, or the built-in
/// template.
pub fn load_template_source(override_path: Option<&Path>) -> anyhow::Result<String> {
    match override_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display())),
        None => Ok(DEFAULT_RESOURCES_TEMPLATE.to_string()),
    }
}

/// Build the template environment around `source`.
pub fn template_environment(source: &str) -> anyhow::Result<Environment<'_>> {
    let mut env = Environment::new();
    env.add_template(RESOURCES_TEMPLATE, source)
        .context("Failed to compile resources template")?;
    Ok(env)
}

/// Import lines for a module: `core_v1 as m_core_v1`.
pub fn import_lines(module: &ModuleOutput) -> Vec<String> {
    module
        .imports
        .iter()
        .map(|m| format!("{} as m_{}", m, m))
        .collect()
}

/// Render one output module.
pub fn render_module(env: &Environment<'_>, module: &ModuleOutput) -> anyhow::Result<String> {
    let tmpl = env
        .get_template(RESOURCES_TEMPLATE)
        .context("Resources template is not registered")?;
    tmpl.render(context! {
        module => module.name,
        objects => module.classes,
        imports => import_lines(module),
    })
    .with_context(|| format!("Failed to render module {}", module.name))
}
