//! cosmql command-line front end.
//!
//! Reads a JSON condition document from a file or stdin and prints the
//! compiled `{"query": ..., "parameters": [...]}` spec.

mod error;

use crate::error::CliError;
use clap::Parser;
use cosmql::prelude::*;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "cosmql",
    version,
    about = "Compile a JSON condition document into a parameterized query"
)]
struct Cli {
    /// Condition document; stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Emit `SELECT COUNT(1)` instead of a paged select.
    #[arg(long)]
    count: bool,

    /// Input is a bare filter object, not a full document.
    #[arg(long)]
    filter_only: bool,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,

    /// Override the document's limit.
    #[arg(long, env = "COSMQL_LIMIT")]
    limit: Option<u32>,

    /// Override the document's offset.
    #[arg(long, env = "COSMQL_OFFSET")]
    offset: Option<u32>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cosmql=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let input = read_input(cli.file.as_deref())?;
    let spec = compile(cli, &input)?;

    render(cli, &spec)
}

fn render(cli: &Cli, spec: &QuerySpec) -> Result<String, CliError> {
    let output = if cli.pretty {
        serde_json::to_string_pretty(spec)?
    } else {
        serde_json::to_string(spec)?
    };

    Ok(output)
}

fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading condition document");
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(CliError::Stdin)?;
            Ok(input)
        }
    }
}

fn compile(cli: &Cli, input: &str) -> Result<QuerySpec, CliError> {
    let mut cond = if cli.filter_only {
        Condition::from_json(&serde_json::from_str::<serde_json::Value>(input)?)?
    } else {
        serde_json::from_str::<ConditionDocument>(input)?.into_condition()?
    };

    if let Some(limit) = cli.limit {
        cond = cond.limit(limit);
    }
    if let Some(offset) = cli.offset {
        cond = cond.offset(offset);
    }

    Ok(if cli.count {
        cond.to_query_spec_for_count()
    } else {
        cond.to_query_spec()
    })
}
