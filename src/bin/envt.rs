//! envt CLI binary entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use thiserror::Error;

use envtraits::registry;
use envtraits::traits::TraitKind;
use envtraits::{reduce, Reduction, TraitError};

/// Errors surfaced by the CLI: domain failures from the library, or a
/// failed write to stdout (which must not exit 0 with truncated output).
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Trait(#[from] TraitError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Trait(e) => e.exit_code().code(),
            CliError::Io(_) => 1,
        }
    }
}

/// Identify runtime environment traits and reduce them to minimal group
/// covers.
#[derive(Parser)]
#[command(name = "envt")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging to stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    verbose: bool,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the traits matching the running environment.
    Current,

    /// List known traits.
    Traits {
        /// Restrict to one kind: architecture, platform, ci, shell,
        /// terminal, agent
        #[arg(long)]
        kind: Option<String>,
    },

    /// List known groups with their member ids.
    Groups {
        /// Only groups in the canonical partitions
        #[arg(long)]
        canonical: bool,
    },

    /// Reduce trait/group ids to the minimal cover of known groups.
    Reduce {
        /// Trait or group ids to cover
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let payload = json!({ "error": e.to_string() });
                eprintln!("{payload}");
            } else {
                eprintln!("envt: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Execute the CLI command.
fn execute(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Current => print_current(cli.json),
        Commands::Traits { kind } => print_traits(kind.as_deref(), cli.json),
        Commands::Groups { canonical } => print_groups(*canonical, cli.json),
        Commands::Reduce { ids } => print_reduce(ids, cli.json),
    }
}

fn print_current(as_json: bool) -> Result<(), CliError> {
    let current: Vec<_> = registry()
        .all_traits()
        .filter(|t| t.current())
        .collect();

    if as_json {
        let infos: Vec<_> = current.iter().map(|t| t.info()).collect();
        emit(&json!(infos))?;
    } else {
        for t in current {
            println!("{} {} ({})", t.icon(), t.id(), t.name());
        }
    }
    Ok(())
}

fn print_traits(kind: Option<&str>, as_json: bool) -> Result<(), CliError> {
    let kind = match kind {
        Some(label) => Some(
            TraitKind::parse(label).ok_or_else(|| TraitError::unknown_ids([label]))?,
        ),
        None => None,
    };

    let traits = registry()
        .all_traits()
        .filter(|t| kind.is_none_or(|k| t.kind() == k));

    if as_json {
        let infos: Vec<_> = traits.map(|t| t.info()).collect();
        emit(&json!(infos))?;
    } else {
        for t in traits {
            println!("{:<14} {} {} ({})", t.kind().label(), t.icon(), t.id(), t.name());
        }
    }
    Ok(())
}

fn print_groups(canonical_only: bool, as_json: bool) -> Result<(), CliError> {
    let groups = registry()
        .all_groups()
        .filter(|g| !canonical_only || g.is_canonical());

    if as_json {
        let entries: Vec<_> = groups
            .map(|g| {
                json!({
                    "id": g.id(),
                    "name": g.name(),
                    "icon": g.icon(),
                    "canonical": g.is_canonical(),
                    "members": g.members().keys().collect::<Vec<_>>(),
                })
            })
            .collect();
        emit(&json!(entries))?;
    } else {
        for g in groups {
            let marker = if g.is_canonical() { "*" } else { " " };
            println!(
                "{marker} {} ({} traits): {}",
                g.id(),
                g.len(),
                g.members().keys().cloned().collect::<Vec<_>>().join(", ")
            );
        }
    }
    Ok(())
}

fn print_reduce(ids: &[String], as_json: bool) -> Result<(), CliError> {
    let cover = reduce(ids.iter().map(String::as_str), None)?;

    if as_json {
        let entries: Vec<_> = cover
            .iter()
            .map(|r| match r {
                Reduction::Group(g) => json!({
                    "group": g.id(),
                    "members": g.members().keys().collect::<Vec<_>>(),
                }),
                Reduction::Trait(t) => json!({ "trait": t.id() }),
            })
            .collect();
        emit(&json!(entries))?;
    } else {
        for r in &cover {
            match r {
                Reduction::Group(g) => println!("group {} ({} traits)", g.id(), g.len()),
                Reduction::Trait(t) => println!("trait {}", t.id()),
            }
        }
    }
    Ok(())
}

/// Write pretty JSON plus a trailing newline; a failed write is an error,
/// never a silent exit 0.
fn emit(value: &serde_json::Value) -> Result<(), io::Error> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::from)?;
    stdout.write_all(b"\n")
}

// ============================================================================
// Tests
// ============================================================================
