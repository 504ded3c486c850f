use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use draftlint_engine::Validator;
use draftlint_rules::{ExampleKind, Registry};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

mod report;

#[derive(Parser)]
#[command(name = "draftlint")]
#[command(about = "Check for common mistakes in LaTeX documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint LaTeX files and report every violation
    Check {
        /// Files to check
        #[arg(value_name = "FILE", required = true)]
        paths: Vec<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// List every registered rule
    Rules,
    /// Show the full explanation and examples for one rule
    Explain {
        /// Rule id, as shown in check output
        id: u32,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let registry = Registry::with_default_rules().context("building the rule registry")?;

    match cli.command {
        Commands::Check { paths, format } => check(&registry, &paths, format),
        Commands::Rules => {
            for rule in registry.iter() {
                println!("[{:03}] {}", rule.id(), rule.brief());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Explain { id } => explain(&registry, id),
    }
}

fn check(registry: &Registry, paths: &[PathBuf], format: Format) -> anyhow::Result<ExitCode> {
    let mut records = Vec::new();
    let mut total = 0usize;

    for path in paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        log::debug!("checking {}", path.display());

        // One validator per document: the environment stack must not
        // leak across files.
        let mut validator = Validator::new(registry);
        for (index, line) in content.lines().enumerate() {
            for violation in validator.validate(line) {
                total += 1;
                match format {
                    Format::Text => report::print_warning(path, index + 1, line, &violation),
                    Format::Json => records.push(report::Record::new(path, index + 1, &violation)),
                }
            }
        }
    }

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        Format::Text if total > 0 => println!("\nTotal of {total} mistakes found."),
        Format::Text => println!("No mistakes found."),
    }

    Ok(if total > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn explain(registry: &Registry, id: u32) -> anyhow::Result<ExitCode> {
    let rule = registry
        .get(id)
        .with_context(|| format!("no rule with id {id}"))?;

    println!("[{:03}] {}", rule.id(), rule.brief());
    if let Some(detail) = rule.detail() {
        println!("\n{detail}");
    }
    for example in rule.examples() {
        let label = match example.kind {
            ExampleKind::Good => "Good",
            ExampleKind::Bad => "Bad",
        };
        println!("\n{label}:\n    {}", example.text);
    }
    Ok(ExitCode::SUCCESS)
}
