//! fsprobe CLI - run the filesystem boundary-scenario catalog
//!
//! Usage:
//!   fsprobe                  # run every scenario
//!   fsprobe --filter rename  # run scenarios whose name matches
//!   fsprobe --json           # machine-readable report
//!
//! Exit status is 0 when no scenario failed (skips are allowed) and 1
//! otherwise.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fsprobe::{Catalog, Report, Verdict};

/// fsprobe - filesystem boundary-condition conformance harness
#[derive(Parser, Debug)]
#[command(name = "fsprobe")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Only run scenarios whose name contains this substring
    #[arg(long)]
    filter: Option<String>,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = Catalog::new().context("Failed to build scenario catalog")?;
    let report = catalog
        .run_filtered(args.filter.as_deref())
        .context("Failed to run scenario catalog")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        render(&report);
    }

    std::process::exit(if report.success() { 0 } else { 1 });
}

fn render(report: &Report) {
    for scenario in &report.scenarios {
        match &scenario.verdict {
            Verdict::Pass => println!("PASS {}", scenario.name),
            Verdict::Fail { expected, observed } => {
                println!(
                    "FAIL {} (expected {expected}, observed {observed})",
                    scenario.name
                );
            }
            Verdict::Skip { reason } => println!("SKIP {} ({reason})", scenario.name),
        }
    }
    println!("{}", report.summary());
}
