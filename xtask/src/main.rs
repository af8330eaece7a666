use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "graphwalk workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the traversal benchmarks and summarise them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH_TARGET: &str = "traversal_benchmark";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// The part of criterion's `estimates.json` the report needs.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
    median: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `group/function/size`, e.g. `chain/reachable/10000`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct BenchKey {
    group: String,
    function: String,
    size: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running {BENCH_TARGET}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--bench").arg(BENCH_TARGET);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.5");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn cargo bench for {BENCH_TARGET}"))?;
    if !status.success() {
        bail!("{BENCH_TARGET} exited with {status}");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        bail!("no criterion output found at {}", criterion_dir.display());
    }

    let mut files = Vec::new();
    collect_estimates(criterion_dir, &mut files)?;

    let mut results = BTreeMap::new();
    for path in files {
        let Some(key) = bench_key(criterion_dir, &path) else {
            continue;
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        results.insert(key, estimates);
    }

    if results.is_empty() {
        bail!("no {BENCH_TARGET} results under {}", criterion_dir.display());
    }

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;

    writeln!(file, "# Traversal Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Graph | Query | Vertices | Mean | Median | Vertices/s |")?;
    writeln!(file, "|---|---|---|---|---|---|")?;

    for (key, est) in &results {
        let mean_ns = est.mean.point_estimate;
        let per_sec = if mean_ns > 0.0 {
            key.size as f64 / (mean_ns / 1e9)
        } else {
            0.0
        };
        writeln!(
            file,
            "| {} | {} | {} | {} | {} | {} |",
            key.group,
            key.function,
            key.size,
            format_duration(mean_ns),
            format_duration(est.median.point_estimate),
            format_rate(per_sec),
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Gathers every `new/estimates.json` below `dir`.
fn collect_estimates(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_estimates(&path, out)?;
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json")
            && path.parent().and_then(Path::file_name).and_then(|s| s.to_str()) == Some("new")
        {
            out.push(path);
        }
    }
    Ok(())
}

/// Criterion lays results out as `<root>/<group>/<function>/<size>/new/estimates.json`.
fn bench_key(root: &Path, estimates: &Path) -> Option<BenchKey> {
    let rel = estimates.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel.iter().filter_map(|c| c.to_str()).collect();
    match parts.as_slice() {
        [group, function, size, "new", "estimates.json"] => Some(BenchKey {
            group: (*group).to_owned(),
            function: (*function).to_owned(),
            size: size.parse().ok()?,
        }),
        _ => None,
    }
}

fn format_duration(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.2} s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(per_sec: f64) -> String {
    if per_sec > 1_000_000.0 {
        format!("{:.2}M", per_sec / 1_000_000.0)
    } else if per_sec > 1_000.0 {
        format!("{:.2}K", per_sec / 1_000.0)
    } else {
        format!("{per_sec:.0}")
    }
}
