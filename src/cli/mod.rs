//! # CLI Module
//!
//! Command-line interface of the `kindgen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Compile a specification and write the resource modules:
//!
//! ```bash
//! kindgen generate --spec swagger.json --output lightkube
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Path to the specification (required)
//! - `--output <DIR>` - Directory receiving `resources/` (default: `.`)
//! - `--config <FILE>` - `kindgen.toml`; auto-detected next to the specification file
//! - `--test-file <FILE>` - Also write an import smoke-test file
//! - `--dry-run` - Render without writing
//! - `--fail-on-warning` - Refuse to generate when a resource would be dropped
//!
//! ### `lint`
//!
//! ```bash
//! kindgen lint --spec swagger.json --fail-on-error
//! ```
//!
//! ### `inspect`
//!
//! Dump the compiled descriptors as JSON, optionally for a single module:
//!
//! ```bash
//! kindgen inspect --spec swagger.json --module core_v1
//! ```

mod commands;


pub use commands::{execute, run_cli, Cli, Commands};
