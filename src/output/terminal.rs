//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{RunReport, Statistics};

/// Format harness statistics for human-readable terminal output.
pub fn format_statistics(name: &str, stats: &Statistics) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(48);

    output.push_str(&format!("{}\n", name.bold()));
    output.push_str(&sep);
    output.push('\n');

    output.push_str(&format!("  Cold run:          {:.3} ms\n", stats.cold_time_ms));
    output.push_str("  Hot runs:\n");
    output.push_str(&format!("    Median:          {:.3} ms\n", stats.median_ms));
    output.push_str(&format!(
        "    Mean (filtered): {:.3} ms\n",
        stats.average_ms
    ));
    output.push_str(&format!("    Min:             {:.3} ms\n", stats.min_ms));
    output.push_str(&format!("    Max:             {:.3} ms\n", stats.max_ms));
    output.push_str(&format!(
        "  Outliers:          {}\n",
        format_outliers(stats.outlier_count, stats.sample_count)
    ));
    output.push_str(&format!(
        "  Warm-up speedup:   {} (by median)\n",
        format_speedup(stats.warmup_speedup())
    ));

    output
}

/// One-line summary of a finder report.
pub fn format_report(report: &RunReport) -> String {
    let throughput = match report.throughput() {
        Some(t) => format!("{}", t.round()),
        None => "n/a".dimmed().to_string(),
    };
    format!(
        "{} total time {:.0} ms, total runs {}, runs / time {}",
        format!("[{}]:", report.label).bold(),
        report.total_time_ms(),
        report.total_draws(),
        throughput
    )
}

/// Single dataset line used by the shapes demo.
pub fn format_line(name: &str, stats: &Statistics) -> String {
    format!(
        "{:<36} median {:>9.4} ms  mean {:>9.4} ms  cold {:>9.4} ms  outliers {}",
        name,
        stats.median_ms,
        stats.average_ms,
        stats.cold_time_ms,
        stats.outlier_count
    )
}

fn format_outliers(outliers: usize, samples: usize) -> String {
    let text = format!("{outliers} of {samples}");
    if outliers == 0 {
        text.green().to_string()
    } else if outliers * 10 > samples {
        text.red().to_string()
    } else {
        text.yellow().to_string()
    }
}

fn format_speedup(speedup: f64) -> String {
    if !speedup.is_finite() {
        return "n/a".dimmed().to_string();
    }
    let text = format!("{speedup:.2}x");
    if speedup >= 1.0 {
        text.green().to_string()
    } else {
        text.yellow().to_string()
    }
}
