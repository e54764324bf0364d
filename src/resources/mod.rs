//! # Resource Compilation
//!
//! Turns matched API paths into resource kinds and the class descriptors
//! the renderer consumes:
//!
//! ```text
//! path string ──grammar──▶ PathMatch ──extract──▶ NormalizedPathRecord
//!     ──aggregate──▶ ApiKey → [records] ──compile──▶ CompiledResource
//!     ──classes──▶ ClassDescriptor (grouped into ModuleOutput)
//! ```
//!
//! Extraction lives in [`crate::spec`] because it reads the typed document;
//! everything here works on records only and never touches the document.

pub mod aggregate;
pub mod classes;
pub mod compile;
pub mod grammar;
mod types;

pub use aggregate::aggregate;
pub use classes::{build_classes, capitalize, collect_modules};
pub use compile::{compile_all, compile_one, GLOBAL_PREFIX};
pub use grammar::{classify_path, match_path, PathClass, PathMatch};
pub use types::*;
