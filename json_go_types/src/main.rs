//! Binary to infer Go struct declarations from a JSON document.
//!
//! Usage: `jsongotypes --name Payload < input.json > types.go`
//!
//! Reads JSON from a file or stdin and writes Go declarations to a file or
//! stdout.

use std::io::{Write, read_to_string, stdin, stdout};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use json_go_types::{DedupMode, TransformError, TransformSettings, transform_to_writer};
use tracing_subscriber::EnvFilter;

/// Infer Go struct declarations from example JSON.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Name of the root type
    #[arg(short, long, default_value = "Root")]
    name: String,

    /// How objects that share a derived type name are merged
    #[arg(long, value_enum, default_value_t = DedupArg::ByName)]
    dedup: DedupArg,

    /// Output file path (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON input file (reads stdin if not specified)
    input: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DedupArg {
    /// Same derived name means same type
    ByName,
    /// Same name and same fields means same type
    Structural,
}

impl From<DedupArg> for DedupMode {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::ByName => Self::ByName,
            DedupArg::Structural => Self::Structural,
        }
    }
}

fn run(cli: &Cli) -> Result<(), TransformError> {
    let json_text: String = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_to_string(stdin())?,
    };

    let settings: TransformSettings = TransformSettings::with_dedup(cli.dedup.into());
    let mut declarations: Vec<u8> = Vec::new();
    transform_to_writer(&cli.name, &json_text, &mut declarations, &settings)?;

    match &cli.output {
        Some(path) => std::fs::write(path, &declarations)?,
        None => stdout().lock().write_all(&declarations)?,
    }
    Ok(())
}

fn main() {
    let cli: Cli = Cli::parse();

    // Logs go to stderr so declarations on stdout stay clean for piping.
    let level = cli.verbose.tracing_level_filter();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("warn,json_go_types={level}")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
