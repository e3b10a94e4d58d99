use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod adapter;
mod angulate;
mod config;
mod error;
mod geometry;
mod models;
mod normalize;
mod pipeline;
mod report;
mod sample;
mod table;
mod validate;

use crate::geometry::{describe_arc, describe_donut_segment, Point};
use crate::models::Snapshot;

#[derive(Parser)]
#[command(name = "seo-infographic-adapter")]
#[command(about = "Turns SEO analytics snapshots into chart-ready metrics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize KPIs, angulate clusters and map the pipeline into an adapted record
    Adapt {
        #[arg(long)]
        input: PathBuf,
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Refuse snapshots that fail validation
        #[arg(long)]
        strict: bool,
    },
    /// Check a snapshot against the generator's data-quality contract
    Validate {
        #[arg(long)]
        input: PathBuf,
    },
    /// Normalize a CSV table of KPIs
    Kpis {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
        #[arg(long, default_value_t = 8)]
        limit: usize,
    },
    /// Print donut segment paths for each topic cluster
    Slices {
        #[arg(long)]
        input: PathBuf,
        /// Print the outer arc only instead of the full ring segment
        #[arg(long)]
        outline: bool,
    },
    /// Emit the reference snapshot
    Sample {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_config().context("invalid adapter configuration")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Adapt { input, out, strict } => {
            let snapshot = load_snapshot(&input)?;
            let adapted = if strict || config.strict {
                adapter::adapt_strict(&snapshot)?
            } else {
                adapter::adapt(&snapshot)
            };
            tracing::info!(
                site = %adapted.site,
                kpis = adapted.meta.kpi_count,
                clusters = adapted.meta.cluster_count,
                steps = adapted.meta.pipeline_steps,
                "snapshot adapted"
            );
            let json = serde_json::to_string_pretty(&adapted)?;
            write_output(out.as_deref(), &json)?;
        }
        Commands::Validate { input } => {
            let snapshot = load_snapshot(&input)?;
            let report = validate::validate(&snapshot);
            if report.is_valid() {
                println!("{} is valid.", input.display());
            } else {
                for issue in report.errors.iter() {
                    println!("- {issue}");
                }
                anyhow::bail!(
                    "{} failed validation with {} issues",
                    input.display(),
                    report.errors.len()
                );
            }
        }
        Commands::Kpis { csv, out } => {
            let file = std::fs::File::open(&csv)
                .with_context(|| format!("failed to open {}", csv.display()))?;
            let kpis = table::read_kpis(file)
                .with_context(|| format!("failed to read KPI rows from {}", csv.display()))?;
            let normalized = normalize::normalize_kpis(&kpis);
            tracing::info!(rows = normalized.len(), "kpis normalized");

            match out {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    table::write_normalized(file, &normalized)?;
                    println!("Wrote {} KPI rows to {}.", normalized.len(), path.display());
                }
                None => table::write_normalized(std::io::stdout().lock(), &normalized)?,
            }
        }
        Commands::Report { input, out, limit } => {
            let snapshot = load_snapshot(&input)?;
            let adapted = adapter::adapt(&snapshot);
            let report = report::build_report(&adapted, limit);
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Slices { input, outline } => {
            let snapshot = load_snapshot(&input)?;
            let adapted = adapter::adapt(&snapshot);
            let outer = config.donut_outer_radius;
            let center = Point { x: outer, y: outer };

            if adapted.meta.total_traffic <= 0.0 {
                tracing::warn!(site = %adapted.site, "no cluster traffic, every slice is empty");
            }
            for cluster in adapted.clusters.iter() {
                let path = if outline {
                    describe_arc(center, outer, cluster.angle_start, cluster.angle_end)
                } else {
                    describe_donut_segment(
                        center,
                        config.donut_inner_radius,
                        outer,
                        cluster.angle_start,
                        cluster.angle_end,
                    )
                };
                println!("{}\t{}", cluster.name, path);
            }
        }
        Commands::Sample { out } => {
            let json = serde_json::to_string_pretty(&sample::sample_snapshot())?;
            write_output(out.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot = adapter::parse_snapshot(&raw)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), site = %snapshot.site, "snapshot loaded");
    Ok(snapshot)
}

fn write_output(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}.", path.display());
        }
        None => println!("{contents}"),
    }
    Ok(())
}
