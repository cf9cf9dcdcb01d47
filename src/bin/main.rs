//! burnrate CLI - Compile SLO definitions to PromQL
//!
//! Usage:
//!   burnrate compile [files...] [--query <query>] [--output <format>]
//!   burnrate validate <files...>
//!   burnrate list <files...>
//!
//! Examples:
//!   burnrate compile slo/checkout.toml
//!   burnrate compile slo/checkout.toml --query budget --output json
//!   burnrate list slo/*.toml

use burnrate::compile::{compile_all, CompileOptions, CompiledObjective};
use burnrate::config::{OutputFormat, Settings};
use burnrate::loader::load_objectives;
use burnrate::model::Objective;
use burnrate::promql::{format_duration, format_target};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "burnrate")]
#[command(about = "burnrate - Compile service-level objectives into PromQL")]
#[command(version)]
struct Cli {
    /// Path to a burnrate.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile objectives to PromQL
    Compile {
        /// Objective files (.toml or .json); defaults to the configured paths
        files: Vec<PathBuf>,

        /// Which query to print
        #[arg(short, long, default_value = "all")]
        query: QueryArg,

        /// Output format (overrides the config file)
        #[arg(short, long)]
        output: Option<OutputArg>,
    },

    /// Check objectives without printing queries
    Validate {
        /// Objective files (.toml or .json)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List objectives defined in files
    List {
        /// Objective files (.toml or .json)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum QueryArg {
    Total,
    Errors,
    Budget,
    All,
}

impl QueryArg {
    fn select(self, compiled: &CompiledObjective) -> Option<&str> {
        match self {
            QueryArg::Total => Some(compiled.total.as_str()),
            QueryArg::Errors => Some(compiled.errors.as_str()),
            QueryArg::Budget => Some(compiled.error_budget.as_str()),
            QueryArg::All => None,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputArg {
    /// Plain text
    Text,
    /// JSON document
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings.log.filter);

    match cli.command {
        Commands::Compile {
            files,
            query,
            output,
        } => cmd_compile(&settings, files, query, output),
        Commands::Validate { files } => cmd_validate(files),
        Commands::List { files } => cmd_list(files),
    }
}

/// Log to stderr. `RUST_LOG` wins over the configured filter.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load every objective from `files`, reporting the first failure.
fn load_all(files: &[PathBuf]) -> Option<Vec<Objective>> {
    let mut objectives = Vec::new();
    for file in files {
        match load_objectives(file) {
            Ok(loaded) => objectives.extend(loaded),
            Err(e) => {
                eprintln!("Error loading '{}': {}", file.display(), e);
                return None;
            }
        }
    }
    Some(objectives)
}

fn cmd_compile(
    settings: &Settings,
    files: Vec<PathBuf>,
    query: QueryArg,
    output: Option<OutputArg>,
) -> ExitCode {
    let files = if files.is_empty() {
        match settings.objectives.resolved_paths() {
            Ok(paths) => paths,
            Err(e) => {
                eprintln!("Error resolving objective paths: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        files
    };

    if files.is_empty() {
        eprintln!("No objective files given and none configured");
        return ExitCode::FAILURE;
    }

    let Some(objectives) = load_all(&files) else {
        return ExitCode::FAILURE;
    };

    let options = CompileOptions::default().with_validation(true);
    let compiled = match compile_all(&objectives, options) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(count = compiled.len(), "compiled objectives");

    let format = output.map(OutputFormat::from).unwrap_or(settings.output.format);
    match format {
        OutputFormat::Text => print_text(&compiled, query),
        OutputFormat::Json => {
            let document = match query {
                QueryArg::All => serde_json::to_string_pretty(&compiled),
                _ => {
                    let selected: Vec<_> = compiled
                        .iter()
                        .map(|c| serde_json::json!({ "name": c.name, "query": query.select(c) }))
                        .collect();
                    serde_json::to_string_pretty(&selected)
                }
            };
            match document {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error encoding JSON: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_text(compiled: &[CompiledObjective], query: QueryArg) {
    for (i, c) in compiled.iter().enumerate() {
        if let Some(q) = query.select(c) {
            println!("{}", q);
            continue;
        }

        if i > 0 {
            println!();
        }
        println!("# {} ({}, {}%)", display_name(&c.name), c.window, c.target);
        println!("total: {}", c.total);
        println!("errors: {}", c.errors);
        println!("error_budget: {}", c.error_budget);
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "<unnamed>"
    } else {
        name
    }
}

fn cmd_validate(files: Vec<PathBuf>) -> ExitCode {
    let mut failed = false;

    for file in &files {
        let objectives = match load_objectives(file) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("{}: {}", file.display(), e);
                failed = true;
                continue;
            }
        };

        let mut file_ok = true;
        for objective in &objectives {
            let result = objective
                .validate()
                .map_err(|e| e.to_string())
                .and_then(|_| objective.indicator.kind().map_err(|e| e.to_string()));
            if let Err(e) = result {
                eprintln!("{}: {}: {}", file.display(), display_name(&objective.name), e);
                file_ok = false;
            }
        }

        if file_ok {
            println!("OK: {} is valid", file.display());
        } else {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn cmd_list(files: Vec<PathBuf>) -> ExitCode {
    let Some(objectives) = load_all(&files) else {
        return ExitCode::FAILURE;
    };

    if objectives.is_empty() {
        println!("No objectives defined.");
        return ExitCode::SUCCESS;
    }

    println!("Objectives:");
    for objective in &objectives {
        let kind = objective
            .indicator
            .kind()
            .map(|k| k.name())
            .unwrap_or("unsupported");
        println!(
            "  - {} (window: {}, target: {}%, indicator: {})",
            display_name(&objective.name),
            format_duration(objective.window),
            format_target(objective.target),
            kind
        );
        if let Some(description) = &objective.description {
            println!("      {}", description);
        }
    }

    ExitCode::SUCCESS
}
