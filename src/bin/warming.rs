//! Cold vs. warmed-up timing of an array sum.

use clap::Parser;
use eyre::WrapErr;

use warmup_bench::logging::init_tracing;
use warmup_bench::output::{format_statistics, to_json_pretty, NamedStatistics};
use warmup_bench::{TimingHarness, DEFAULT_MEASUREMENTS, DEFAULT_WARMUP_ITERATIONS};

#[derive(Parser, Debug)]
#[command(name = "warming", about = "Measure cold-start and warmed-up timings of an array sum")]
struct Args {
    /// Untimed warm-up calls before hot sampling.
    #[arg(long, default_value_t = DEFAULT_WARMUP_ITERATIONS)]
    iterations: usize,

    /// Timed hot samples.
    #[arg(long, default_value_t = DEFAULT_MEASUREMENTS)]
    measurements: usize,

    /// Elements in the summed array.
    #[arg(long, default_value_t = 10_000)]
    len: u64,

    /// Print statistics as JSON.
    #[arg(long)]
    json: bool,

    /// Log at debug level when RUST_LOG is unset.
    #[arg(short, long)]
    verbose: bool,
}

fn sum_array(values: &[u64]) -> u64 {
    values.iter().fold(0u64, |acc, &v| acc.wrapping_add(v))
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose).wrap_err("failed to initialize logging")?;

    let data: Vec<u64> = (0..args.len).collect();
    let stats = TimingHarness::new()
        .iterations(args.iterations)
        .measurements(args.measurements)
        .measure(sum_array, &data[..])?;

    if args.json {
        println!("{}", to_json_pretty(&NamedStatistics::new("sum_array", &stats))?);
    } else {
        print!("{}", format_statistics("sum_array", &stats));
    }

    Ok(())
}
