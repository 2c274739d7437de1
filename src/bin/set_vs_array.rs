//! Set vs. array duplicate search benchmark.
//!
//! Runs the adaptive finder, then the set and array strategies, each for
//! `run_count` trials over the same deterministic stream, and prints total
//! time, total draws and draws per millisecond.

use clap::Parser;
use eyre::WrapErr;
use tracing::info;

use warmup_bench::logging::init_tracing;
use warmup_bench::output::{format_report, reports_to_json};
use warmup_bench::{FinderConfig, ThresholdPolicy, TrialRunner};

#[derive(Parser, Debug)]
#[command(
    name = "set-vs-array",
    about = "Compare set- and array-backed search for N distinct consecutive characters"
)]
struct Args {
    /// Distinct characters to collect per run (default: 10).
    count: Option<usize>,

    /// Print reports as JSON instead of summary lines.
    #[arg(long)]
    json: bool,

    /// Log at debug level when RUST_LOG is unset.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose).wrap_err("failed to initialize logging")?;

    let config = args
        .count
        .map(FinderConfig::with_count)
        .unwrap_or_default();
    let runner = TrialRunner::new(config)?;
    let policy = ThresholdPolicy::default();

    info!(
        count = config.count,
        chars_until = config.chars_until,
        run_count = config.run_count,
        "configuration"
    );

    let reports = runner.run_all_with(policy)?;

    if args.json {
        println!("{}", reports_to_json(&reports)?);
        return Ok(());
    }

    println!("max {}", runner.alphabet().len());
    let (adapted, fixed) = reports.split_at(1);
    for report in adapted {
        println!("Using [{}] for count {}", report.strategy, report.count);
        println!("{}", format_report(report));
    }
    println!();
    for report in fixed {
        println!("{}", format_report(report));
    }

    Ok(())
}
