use crate::generator::{
    generate_resources, load_config_for_spec, load_template_source, template_environment,
    GenerateOptions,
};
use crate::linter::{fail_if_errors, lint_spec, print_lint_issues, LintIssue, LintSeverity};
use crate::logging::{init_logging_with_config, LogConfig};
use crate::spec::compile_file;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Command-line interface for kindgen
///
/// Compiles a Kubernetes-style OpenAPI document into resource classes.
#[derive(Parser, Debug)]
#[command(name = "kindgen")]
#[command(version, about = "Generate client resource classes from an OpenAPI document", long_about = None)]
pub struct Cli {
    /// Log level (overrides KINDGEN_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the document and write one module of resource classes per tag
    Generate {
        /// Path to the specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Output directory; the resources directory is created inside it
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Path to the generator config (kindgen.toml)
        /// If not provided, will auto-detect alongside the specification file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write an import smoke-test file listing every generated module
        #[arg(long)]
        test_file: Option<PathBuf>,

        /// Perform a dry run: show what would be written without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Fail instead of generating when resources would be dropped
        #[arg(long, default_value_t = false)]
        fail_on_warning: bool,
    },
    /// Report what the compiler drops or decides while reading the document
    Lint {
        /// Path to the specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// Print the compiled class descriptors as JSON
    Inspect {
        /// Path to the specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Only print this output module
        #[arg(short, long)]
        module: Option<String>,
    },
}

fn log_diagnostics(issues: &[LintIssue]) {
    for issue in issues {
        match issue.severity {
            LintSeverity::Error | LintSeverity::Warning => {
                warn!(kind = %issue.kind, location = %issue.location, "{}", issue.message)
            }
            LintSeverity::Info => {
                debug!(kind = %issue.kind, location = %issue.location, "{}", issue.message)
            }
        }
    }
}

/// Parse arguments, initialize logging and run the selected command
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_env();
    if let Some(level) = &cli.log_level {
        log_config = log_config.with_level(level.clone());
    }
    init_logging_with_config(&log_config)?;
    execute(&cli)
}

/// Run an already parsed command
pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            spec,
            output,
            config,
            test_file,
            dry_run,
            fail_on_warning,
        } => {
            let generator_config = load_config_for_spec(config.as_deref(), spec)?;
            let compilation = compile_file(spec)?;
            log_diagnostics(&compilation.diagnostics);

            if *fail_on_warning
                && compilation
                    .diagnostics
                    .iter()
                    .any(|i| i.severity != LintSeverity::Info)
            {
                print_lint_issues(&compilation.diagnostics);
                bail!("{} would drop resources; not generating", spec.display());
            }

            let source = load_template_source(generator_config.template.as_deref())?;
            let env = template_environment(&source)?;
            let mut options = GenerateOptions::from_config(output.clone(), &generator_config);
            if let Some(test_file) = test_file {
                options.test_file = Some(test_file.clone());
            }
            options.dry_run = *dry_run;

            let report = generate_resources(&compilation, &env, &options)?;
            info!(
                modules = report.modules.len(),
                classes = compilation.stats.classes,
                "Generation finished"
            );
            println!(
                "📦 {} module(s), {} class(es) from {} path(s)",
                report.modules.len(),
                compilation.stats.classes,
                compilation.stats.paths_seen
            );
            Ok(())
        }
        Commands::Lint {
            spec,
            fail_on_error,
            errors_only,
        } => {
            let issues = lint_spec(spec)?;

            let shown: Vec<LintIssue> = if *errors_only {
                issues
                    .into_iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .collect()
            } else {
                issues
            };
            print_lint_issues(&shown);
            if *fail_on_error {
                fail_if_errors(&shown);
            }
            Ok(())
        }
        Commands::Inspect { spec, module } => {
            let compilation = compile_file(spec)?;
            let out = match module {
                Some(name) => {
                    let Some(found) = compilation.module(name) else {
                        bail!("module '{}' not found in {}", name, spec.display());
                    };
                    serde_json::to_value(found)?
                }
                None => json!({
                    "stats": compilation.stats,
                    "modules": compilation.modules,
                    "diagnostics": compilation.diagnostics,
                }),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&out).context("Failed to serialize descriptors")?
            );
            Ok(())
        }
    }
}
