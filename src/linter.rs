//! # Spec Linter Module
//!
//! Reports what the resource compiler had to tolerate or give up on while
//! reading a specification:
//!
//! 1. **unidentified_resource** - a bucket of paths without any group/version/kind; dropped
//! 2. **missing_identity** - a single path whose operations carry no group/version/kind
//! 3. **ambiguous_tag** - a path tagged with more than one module
//! 4. **unresolved_reference** / **unsupported_reference** / **malformed_schema_name** -
//!    hard failures that stop generation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kindgen::linter::{lint_spec, print_lint_issues};
//! use std::path::Path;
//!
//! let issues = lint_spec(Path::new("swagger.json"))?;
//! print_lint_issues(&issues);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::error::CompileError;
use crate::spec::{compile_document, load_document};
use serde::Serialize;
use std::fmt;
use std::path::Path;


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Error - Generation cannot proceed
    Error,
    /// Warning - Part of the document is dropped from the output
    Warning,
    /// Info - A deterministic choice was made for an ambiguous input
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => f.write_str("error"),
            LintSeverity::Warning => f.write_str("warning"),
            LintSeverity::Info => f.write_str("info"),
        }
    }
}

/// A lint issue found while compiling a specification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "path:/api/v1/pods")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "unidentified_resource", "ambiguous_tag")
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&CompileError> for LintIssue {
    fn from(err: &CompileError) -> Self {
        let (location, inner) = match err {
            CompileError::InPath { path, source } => (format!("path:{}", path), source.as_ref()),
            other => ("document".to_string(), other),
        };
        let (kind, suggestion) = match inner {
            CompileError::UnresolvedReference { .. } => (
                "unresolved_reference",
                "add the referenced entry to `definitions` or `parameters`",
            ),
            CompileError::UnsupportedReference { .. } => (
                "unsupported_reference",
                "use #/definitions/<name> for schemas and #/parameters/<name> for parameters",
            ),
            CompileError::MalformedSchemaName { .. } => (
                "malformed_schema_name",
                "name definitions <prefix>.api.<group>.<version>.<Type>",
            ),
            CompileError::InPath { .. } => ("compile_error", "fix the referenced path entry"),
        };
        LintIssue::new(location, LintSeverity::Error, kind, inner.to_string())
            .with_suggestion(suggestion)
    }
}

/// Lint a specification file
///
/// Runs the full resource compilation and returns its diagnostics. A hard
/// compile failure is reported as a single error-level issue instead of an
/// `Err`; only I/O and parse failures of the document are returned as errors.
pub fn lint_spec(spec_path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let doc = load_document(spec_path)?;
    match compile_document(&doc) {
        Ok(compilation) => Ok(compilation.diagnostics),
        Err(err) => Ok(vec![LintIssue::from(&err)]),
    }
}

/// Whether any issue has error severity
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

fn print_section(title: &str, issues: &[&LintIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("{}", title);
    for issue in issues {
        println!("   [{}] {}", issue.kind, issue.location);
        println!("      {}", issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("      💡 Suggestion: {}", suggestion);
        }
    }
    println!();
}

/// Print lint issues in a formatted way
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let by_severity = |severity: LintSeverity| -> Vec<&LintIssue> {
        issues.iter().filter(|i| i.severity == severity).collect()
    };
    let errors = by_severity(LintSeverity::Error);
    let warnings = by_severity(LintSeverity::Warning);
    let infos = by_severity(LintSeverity::Info);

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    print_section("❌ Errors (must fix):", &errors);
    print_section("⚠️  Warnings (resources dropped):", &warnings);
    print_section("ℹ️  Info (deterministic choices):", &infos);
}

/// Exit with error code if there are any error-level lint issues
pub fn fail_if_errors(issues: &[LintIssue]) {
    if has_errors(issues) {
        print_lint_issues(issues);
        std::process::exit(1);
    }
}
