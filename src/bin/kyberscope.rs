//! Command-line driver: analyse named or custom Kyber parameter sets.
//!
//! ```bash
//! # Default selection of toy sets
//! kyberscope
//!
//! # Kyber levels, JSON output
//! kyberscope --set light --set recommended --set paranoid --format json
//!
//! # Custom sets from a parameter file, without the attack estimates
//! RUST_LOG=debug kyberscope --config sets.toml --skip-security
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use kyberscope::config::ConfigFile;
use kyberscope::params::kyber as specs;
use kyberscope::report::{analyze, NamedSet};

#[derive(Parser)]
#[command(name = "kyberscope", about = "Security, bandwidth and failure estimates for Kyber parameter sets")]
struct Cli {
    /// Named parameter set to analyse (repeatable)
    #[arg(long = "set", value_name = "NAME")]
    sets: Vec<String>,

    /// Analyse every built-in parameter set
    #[arg(long)]
    all: bool,

    /// List the built-in parameter sets and exit
    #[arg(long)]
    list: bool,

    /// TOML file with additional parameter sets
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip the lattice attack estimates
    #[arg(long)]
    skip_security: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Selected sets; a set whose parameters are invalid carries its error
type Selection = Vec<(String, kyberscope::kem::error::Result<NamedSet>)>;

fn select(cli: &Cli) -> anyhow::Result<Selection> {
    let mut selection = Selection::new();

    if cli.all {
        for spec in specs::ALL {
            selection.push((spec.name.to_string(), NamedSet::from_spec(spec)));
        }
    }

    for name in &cli.sets {
        let Some(spec) = specs::by_name(name) else {
            bail!("unknown parameter set '{}' (see --list)", name);
        };
        selection.push((spec.name.to_string(), NamedSet::from_spec(spec)));
    }

    if let Some(path) = &cli.config {
        let config = ConfigFile::load(path)
            .with_context(|| format!("loading parameter sets from {}", path.display()))?;
        for entry in &config.parameter_sets {
            selection.push((entry.name.clone(), entry.to_named_set()));
        }
    }

    if selection.is_empty() && !cli.all && cli.sets.is_empty() && cli.config.is_none() {
        for spec in specs::DEFAULT_REPORT {
            selection.push((spec.name.to_string(), NamedSet::from_spec(spec)));
        }
    }

    Ok(selection)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        for spec in specs::ALL {
            println!("{:<22} {}", spec.name, spec.title);
        }
        return Ok(());
    }

    let selection = select(&cli)?;
    let total = selection.len();
    let mut reports = Vec::with_capacity(total);
    let mut failed = 0usize;

    for (name, set) in selection {
        let result = set
            .map_err(kyberscope::api::Error::from)
            .and_then(|set| analyze(&set, !cli.skip_security));
        match result {
            Ok(report) => {
                if cli.format == Format::Text {
                    println!("{}", report);
                }
                reports.push(report);
            }
            Err(err) => {
                failed += 1;
                tracing::error!(set = %name, %err, "skipping parameter set");
            }
        }
    }

    if cli.format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if failed > 0 {
        bail!("{} of {} parameter sets could not be analysed", failed, total);
    }
    Ok(())
}
