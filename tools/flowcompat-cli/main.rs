use clap::{Parser, ValueEnum};
use flowcompat::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI-specific mirror of `WalkDepth` for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DepthCli {
    TwoLevel,
    Recursive,
}

impl From<DepthCli> for WalkDepth {
    fn from(depth: DepthCli) -> Self {
        match depth {
            DepthCli::TwoLevel => WalkDepth::TwoLevel,
            DepthCli::Recursive => WalkDepth::Recursive,
        }
    }
}

/// Replace node types a flow runtime does not know with placeholder nodes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow JSON file
    flow_path: PathBuf,

    /// Runtime node manifest (.config.nodes.json); built-in types are used when omitted
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Overwrite the input file
    #[arg(long)]
    in_place: bool,

    /// Only report whether conversion is needed (exit code 1 if it is)
    #[arg(long, conflicts_with_all = ["output", "in_place"])]
    check: bool,

    /// How far to descend into subflow containers
    #[arg(short, long, value_enum, default_value = "recursive")]
    depth: DepthCli,

    /// Remove group references that point at placeholder nodes
    #[arg(long)]
    sanitize_groups: bool,

    /// Print the normalization report as JSON on stderr instead of a summary line
    #[arg(long)]
    json_report: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let total_start = Instant::now();

    let registry = match &cli.manifest {
        Some(path) => TypeRegistry::from_manifest_file(path),
        None => TypeRegistry::builtin(),
    };
    info!(
        types = registry.len(),
        source = ?registry.source(),
        "Resolved known node types"
    );

    let mut document = FlowDocument::from_file(&cli.flow_path)?;
    debug!(
        entries = document.entries.len(),
        shape = ?document.shape(),
        wrapped = document.is_wrapped(),
        "Loaded flow document"
    );

    let normalizer = Normalizer::builder(&registry)
        .depth(cli.depth.into())
        .sanitize_groups(cli.sanitize_groups)
        .build();

    let needs_conversion = normalizer.needs_conversion(&document.entries);
    if cli.check {
        println!(
            "{}: {}",
            cli.flow_path.display(),
            if needs_conversion {
                "conversion needed"
            } else {
                "all node types known"
            }
        );
        return Ok(if needs_conversion {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    if needs_conversion {
        let report = normalizer.normalize_document(&mut document);
        if cli.json_report {
            eprintln!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            eprintln!("{}", report);
        }
    } else if ensure_flow_order(&mut document.entries) {
        eprintln!("All node types known; reordered tabs and subflows first");
    } else {
        eprintln!("All node types known; nothing to change");
    }

    let destination = if cli.in_place {
        Some(cli.flow_path.clone())
    } else {
        cli.output.clone()
    };
    match destination {
        Some(path) => {
            document.save(&path)?;
            eprintln!("Wrote '{}'", path.display());
        }
        None => println!("{}", document.to_json_pretty()?),
    }

    debug!(elapsed = ?total_start.elapsed(), "Done");
    Ok(ExitCode::SUCCESS)
}
