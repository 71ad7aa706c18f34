use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use diagnostic::{render, DiagnosticRecord, DiagnosticSink, Error};
use processor::{
    sink::{FileSink, MemorySink},
    source::load_declarations,
    BatchReport, Processor, ProcessorConfig,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "Processor.toml";

#[derive(Parser)]
#[command(name = "activity_processor")]
#[command(
    version,
    about = "Generates activity subclasses from a declaration manifest",
    long_about = None
)]
struct Cli {
    /// Declaration manifest (TOML)
    manifest: PathBuf,

    /// Processor config, defaults to ./Processor.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root directory for generated sources
    #[arg(short, long, default_value = "generated")]
    out: PathBuf,

    /// Diagnostic output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: Format,

    /// Run the whole batch without writing any files
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Rendered for a terminal, on stderr
    Human,
    /// One JSON object per diagnostic, on stdout
    Json,
}

struct TerminalSink {
    format: Format,
}

impl DiagnosticSink for TerminalSink {
    fn report(&mut self, error: Error) {
        match self.format {
            Format::Human => eprint!("{}", render(&error)),
            Format::Json => {
                if let Err(err) = DiagnosticRecord::from(&error).emit() {
                    tracing::error!("could not serialize diagnostic: {err}");
                }
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ProcessorConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => return Ok(ProcessorConfig::default()),
    };
    ProcessorConfig::load(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))
}

fn run(cli: &Cli) -> Result<BatchReport> {
    let config = load_config(cli.config.as_deref())?;
    let source = load_declarations(&cli.manifest)
        .with_context(|| format!("Failed to load manifest: {}", cli.manifest.display()))?;

    let processor = Processor::new(&config);
    let mut diagnostics = TerminalSink { format: cli.format };
    let report = match cli.check {
        true => {
            let mut sink = MemorySink::new();
            let report = processor.process(&source, &mut diagnostics, &mut sink);
            for artifact in sink.artifacts() {
                tracing::info!(class = %artifact.qualified_name(), "checked");
            }
            report
        }
        false => {
            let mut sink = FileSink::new(&cli.out);
            let report = processor.process(&source, &mut diagnostics, &mut sink);
            tracing::info!(root = %sink.root().display(), "sources written");
            report
        }
    };
    Ok(report)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            if matches!(cli.format, Format::Human) {
                eprintln!(
                    "{} generated, {} failed, {} diagnostic(s)",
                    report.generated.len(),
                    report.failed.len(),
                    report.diagnostics
                );
            }
            match report.is_clean() {
                true => ExitCode::SUCCESS,
                false => ExitCode::FAILURE,
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
