//! # kindgen
//!
//! **kindgen** compiles a Kubernetes-style OpenAPI/Swagger document into resource
//! kinds and renders them as client resource classes.
//!
//! ## Overview
//!
//! A large resource API describes every kind through many paths: a namespaced
//! collection, a cluster-wide list, the named instance, and sub-resources such as
//! `status` or `scale`. kindgen folds these back into one resource per
//! `(group, version, plural)` and works out which actions each exposes.
//!
//! ## Architecture
//!
//! - **[`spec`]** - Loading the document and extracting one record per path
//! - **[`resources`]** - Path grammar, aggregation, resource compilation, class descriptors
//! - **[`schema`]** - Mapping `#/definitions/...` references to model modules
//! - **[`generator`]** - Rendering modules through a minijinja template
//! - **[`linter`]** - Diagnostics about dropped resources and ambiguous input
//! - **[`cli`]** - The `kindgen` binary
//!
//! ### Compilation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(kindgen)
//!     participant Load as spec::load_document
//!     participant Extract as spec::extract_records
//!     participant Grammar as resources::grammar
//!     participant Compile as resources::compile
//!     participant Classes as resources::classes
//!     participant Gen as generator
//!
//!     CLI->>Load: load_document("swagger.json")
//!     Load->>Load: Parse YAML/JSON, prune path items
//!     Load-->>CLI: SpecDocument
//!     CLI->>Extract: extract_records(&doc)
//!     Extract->>Grammar: classify_path(path)
//!     Grammar-->>Extract: PathMatch
//!     Extract->>Extract: Fold operations into verbs, identity, tags, schema
//!     Extract-->>CLI: Vec<NormalizedPathRecord>
//!     CLI->>Compile: compile_all(aggregate(records))
//!     Compile-->>CLI: Vec<CompiledResource>
//!     CLI->>Classes: collect_modules(&resources)
//!     Classes-->>CLI: Vec<ModuleOutput>
//!     CLI->>Gen: generate_resources(&compilation)
//!     Gen-->>CLI: resources/<module>.py
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use kindgen::spec::compile_file;
//! use std::path::Path;
//!
//! let compilation = compile_file(Path::new("swagger.json"))?;
//! for module in &compilation.modules {
//!     println!("{}: {} classes", module.name, module.classes.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod linter;
pub mod logging;
pub mod resources;
pub mod schema;
pub mod spec;

pub use error::CompileError;
pub use spec::{compile_document, compile_file, load_document, Compilation};
