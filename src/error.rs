use std::fmt;

/// Hard failures of the path-to-resource compiler.
///
/// Everything else the compiler meets in a large spec (paths outside the
/// grammar, `connect` actions, buckets without a kind) is tolerated and at
/// most reported as a lint issue. A reference that does not resolve is a
/// defect in the document and stops the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A `$ref` points at a definition or shared parameter that does not exist
    UnresolvedReference {
        /// The reference as written in the document
        reference: String,
    },
    /// A `$ref` uses a prefix other than `#/definitions/` or `#/parameters/`
    UnsupportedReference {
        /// The reference as written in the document
        reference: String,
    },
    /// A definition name that cannot be split into module and type
    MalformedSchemaName {
        /// The definition name after the reference prefix
        name: String,
    },
    /// Wraps an error with the path entry that triggered it
    InPath {
        /// Raw path string from `paths`
        path: String,
        /// The underlying failure
        source: Box<CompileError>,
    },
}

impl CompileError {
    /// Attach the raw path that was being extracted when the error occurred.
    pub fn in_path(self, path: &str) -> Self {
        CompileError::InPath {
            path: path.to_string(),
            source: Box::new(self),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnresolvedReference { reference } => {
                write!(f, "unresolved reference '{}'", reference)
            }
            CompileError::UnsupportedReference { reference } => {
                write!(
                    f,
                    "unsupported reference '{}': expected #/definitions/<name> or #/parameters/<name>",
                    reference
                )
            }
            CompileError::MalformedSchemaName { name } => {
                write!(
                    f,
                    "malformed schema name '{}': expected at most <group>.<version>.<Type> after the api prefix",
                    name
                )
            }
            CompileError::InPath { path, source } => write!(f, "{}: {}", path, source),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::InPath { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
