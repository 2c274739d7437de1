//! Uniform vs. heterogeneous value shapes through one `value()` call site.

use clap::Parser;
use eyre::WrapErr;
use tracing::info;

use warmup_bench::logging::init_tracing;
use warmup_bench::output::{format_line, to_json_pretty, NamedStatistics};
use warmup_bench::shapes::{double_dyn, double_numbers, double_records, double_values, Datasets};
use warmup_bench::{Statistics, TimingHarness};

#[derive(Parser, Debug)]
#[command(name = "shapes", about = "Compare dispatch over one value shape against mixed shapes")]
struct Args {
    /// Untimed warm-up calls per dataset.
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,

    /// Timed hot samples per dataset.
    #[arg(long, default_value_t = 100)]
    measurements: usize,

    /// Elements per dataset.
    #[arg(long, default_value_t = 1_000)]
    len: usize,

    /// Print statistics as JSON.
    #[arg(long)]
    json: bool,

    /// Log at debug level when RUST_LOG is unset.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose).wrap_err("failed to initialize logging")?;

    let data = Datasets::new(args.len);
    let mixed_dyn = data.mixed_dyn();
    let harness = TimingHarness::new()
        .iterations(args.iterations)
        .measurements(args.measurements);

    info!(len = args.len, "datasets built");

    let results: Vec<(&str, Statistics)> = vec![
        ("shapes (records)", harness.measure(double_values, &data.record_shapes[..])?),
        ("shapes (numbers)", harness.measure(double_values, &data.number_shapes[..])?),
        ("shapes (texts)", harness.measure(double_values, &data.text_shapes[..])?),
        ("shapes (mixed)", harness.measure(double_values, &data.mixed_shapes[..])?),
        ("dyn (mixed)", harness.measure(double_dyn, &mixed_dyn[..])?),
        ("uniform (records)", harness.measure(double_records, &data.records[..])?),
        ("uniform (numbers)", harness.measure(double_numbers, &data.numbers[..])?),
        (
            "shapes (alternating datasets)",
            harness.measure(
                |d: &Datasets| {
                    (
                        double_values(&d.record_shapes),
                        double_values(&d.number_shapes),
                        double_values(&d.text_shapes),
                        double_values(&d.mixed_shapes),
                    )
                },
                &data,
            )?,
        ),
    ];

    if args.json {
        let named: Vec<NamedStatistics<'_>> = results
            .iter()
            .map(|(name, stats)| NamedStatistics::new(name, stats))
            .collect();
        println!("{}", to_json_pretty(&named)?);
    } else {
        for (name, stats) in &results {
            println!("{}", format_line(name, stats));
        }
    }

    Ok(())
}
