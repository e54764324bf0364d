//! # Generator Module
//!
//! Renders a [`Compilation`](crate::spec::Compilation) into client source
//! files: one Python module of resource classes per output module, plus an
//! optional smoke-test file importing each of them.
//!
//! ## Architecture
//!
//! ```text
//! Compilation → ModuleOutput → minijinja template → <output>/<resources_dir>/<module>.py
//! ```
//!
//! 1. **Config** - `kindgen.toml` next to the document (or `--config`) picks the
//!    package name, resources directory and an optional template override
//! 2. **Templates** - the built-in `resources.py` template, or the override
//! 3. **Project** - recreates the resources directory and writes the files
//!
//! ## Generated Structure
//!
//! ```text
//! <output>/
//! └── resources/
//!     ├── core_v1.py
//!     ├── apps_v1.py
//!     └── ...
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,no_run
//! use kindgen::generator::{
//!     generate_resources, load_template_source, template_environment, GenerateOptions,
//!     GeneratorConfig,
//! };
//! use kindgen::spec::compile_file;
//! use std::path::Path;
//!
//! let compilation = compile_file(Path::new("swagger.json"))?;
//! let source = load_template_source(None)?;
//! let env = template_environment(&source)?;
//! let options = GenerateOptions::from_config("out", &GeneratorConfig::default());
//! generate_resources(&compilation, &env, &options)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod config;
mod project;
mod templates;
#[cfg(test)]
mod tests;

pub use config::*;
pub use project::*;
pub use templates::*;
