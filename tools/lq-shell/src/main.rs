//! LQ-Shell: drive a Linked-Queue from a script or interactively.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use lq_shell::{Interpreter, RunSummary, ShellConfig};
use lq_telemetry::{init_logging, TelemetryConfig};

/// LQ-Shell: Linked-Queue command interpreter
#[derive(Parser, Debug)]
#[command(name = "lq-shell")]
#[command(about = "Run queue commands from a script or stdin and check the results")]
struct Args {
    /// Command file to execute; reads stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the queue after every command
    #[arg(short, long)]
    verbose: bool,

    /// Probability that an allocation is refused
    #[arg(long, default_value = "0")]
    fail_probability: f64,

    /// Seed for injected failures
    #[arg(long)]
    seed: Option<u64>,

    /// Errors tolerated before execution stops
    #[arg(long, default_value = "5")]
    error_limit: usize,

    /// Maximum length of removed strings reported by rh
    #[arg(long, default_value = "1024")]
    string_length: usize,

    /// Maximum items printed by show
    #[arg(long, default_value = "50")]
    show_limit: usize,

    /// Maximum queue elements
    #[arg(long)]
    max_elements: Option<usize>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            verbose: self.verbose,
            fail_probability: self.fail_probability,
            seed: self.seed,
            error_limit: self.error_limit,
            string_length: self.string_length,
            show_limit: self.show_limit,
            max_elements: self.max_elements,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }
    if args.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_logging(&telemetry).context("failed to initialize logging")?;

    let stdout = io::stdout().lock();
    let mut interpreter =
        Interpreter::new(args.shell_config(), stdout).context("invalid shell options")?;

    let summary = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open command file {}", path.display()))?;
            interpreter.run(BufReader::new(file), true)?
        }
        None => {
            let stdin = io::stdin();
            let echo = !stdin.is_terminal();
            interpreter.run(stdin.lock(), echo)?
        }
    };

    tracing::info!(
        commands = summary.commands,
        errors = summary.errors,
        aborted = summary.aborted,
        "Run finished"
    );
    Ok(exit_code(&summary))
}

fn exit_code(summary: &RunSummary) -> ExitCode {
    if summary.errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
