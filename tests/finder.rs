//! Duplicate finder strategies, selection and trial driver.

use std::cell::Cell;

use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use warmup_bench::finder::{find_with_array, find_with_set};
use warmup_bench::stream::ReplaySource;
use warmup_bench::{
    AdaptiveFinder, Alphabet, FinderConfig, ScriptedClock, StreamGenerator, Strategy,
    StrategyPolicy, ThresholdPolicy, TrialRunner,
};

/// Policy spy that records how often each strategy was chosen.
struct CountingPolicy<P> {
    inner: P,
    sets: Cell<usize>,
    arrays: Cell<usize>,
}

impl<P: StrategyPolicy> CountingPolicy<P> {
    fn new(inner: P) -> Self {
        Self {
            inner,
            sets: Cell::new(0),
            arrays: Cell::new(0),
        }
    }
}

impl<P: StrategyPolicy> StrategyPolicy for CountingPolicy<P> {
    fn select(&self, count: usize) -> Strategy {
        let strategy = self.inner.select(count);
        match strategy {
            Strategy::Set => self.sets.set(self.sets.get() + 1),
            Strategy::Array => self.arrays.set(self.arrays.get() + 1),
        }
        strategy
    }
}

#[test]
fn end_to_end_scenario() {
    let recorded: Vec<char> = StreamGenerator::with_master(5, 10).unwrap().take(12).collect();
    assert_eq!(recorded.iter().collect::<String>(), "bcdabcdababc");

    let tail: Vec<char> = "abc".chars().collect();
    let mut for_set = ReplaySource::new(recorded.clone(), tail.clone());
    let mut for_array = ReplaySource::new(recorded, tail);

    let set_runs = find_with_set(&mut for_set, 3);
    let array_runs = find_with_array(&mut for_array, 3);

    assert_eq!(set_runs, array_runs);
    assert_eq!(for_set.position(), for_array.position());
}

#[test]
fn generator_runs_agree_across_strategies() {
    for count in [1, 2, 5, 10, 49, 50, 79] {
        let mut a = StreamGenerator::with_master(count, 5_000).unwrap();
        let mut b = StreamGenerator::with_master(count, 5_000).unwrap();
        assert_eq!(
            find_with_set(&mut a, count),
            find_with_array(&mut b, count),
            "count = {count}"
        );
    }
}

#[test]
fn ramp_forces_search_past_chars_until() {
    // The ramp only has count - 1 symbols, so the search cannot finish
    // before the stream switches to the full cycle at i = chars_until.
    let mut generator = StreamGenerator::with_master(10, 1_000).unwrap();
    let draws = find_with_set(&mut generator, 10);
    assert!(draws >= 1_000, "draws = {draws}");
}

#[test]
fn threshold_boundary_selects_expected_strategy() {
    let finder = AdaptiveFinder::new(ThresholdPolicy::default());
    assert_eq!(finder.strategy_for(49), Strategy::Array);
    assert_eq!(finder.strategy_for(50), Strategy::Set);
}

#[test]
fn threshold_boundary_observed_by_spy() {
    let spy = CountingPolicy::new(ThresholdPolicy::default());
    let finder = AdaptiveFinder::new(&spy);

    let mut below = StreamGenerator::with_master(49, 100).unwrap();
    finder.find(&mut below, 49);
    assert_eq!((spy.arrays.get(), spy.sets.get()), (1, 0));

    let mut at = StreamGenerator::with_master(50, 100).unwrap();
    finder.find(&mut at, 50);
    assert_eq!((spy.arrays.get(), spy.sets.get()), (1, 1));
}

#[test]
fn injected_threshold_exercises_both_strategies() {
    let finder = AdaptiveFinder::new(ThresholdPolicy::new(3));
    assert_eq!(finder.strategy_for(2), Strategy::Array);
    assert_eq!(finder.strategy_for(3), Strategy::Set);
}

#[test]
fn trial_reports_agree_and_use_clock() {
    let config = FinderConfig {
        count: 5,
        chars_until: 200,
        run_count: 4,
    };
    let clock = ScriptedClock::from_durations(vec![0.5; 12]);
    let runner = TrialRunner::with_clock(config, Alphabet::master(), &clock).unwrap();

    let reports = runner.run_all().unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].strategy, Strategy::Array);
    for report in &reports {
        assert_eq!(report.runs.len(), 4);
        assert!((report.total_time_ms() - 2.0).abs() < 1e-9);
        assert_eq!(report.total_draws(), reports[0].total_draws());
    }
    assert_eq!(clock.reads(), 2 * 12);
}

#[test]
fn adapted_report_uses_set_at_threshold() {
    let config = FinderConfig {
        count: 50,
        chars_until: 100,
        run_count: 1,
    };
    let runner = TrialRunner::new(config).unwrap();
    let reports = runner.run_all().unwrap();
    assert_eq!(reports[0].label, "adapted");
    assert_eq!(reports[0].strategy, Strategy::Set);
}

fn arb_stream() -> impl proptest::strategy::Strategy<Value = (Vec<char>, usize)> {
    (1usize..=12).prop_flat_map(|count| {
        let symbols: Vec<char> = "abcdefghijkl".chars().collect();
        (prop::collection::vec(prop::sample::select(symbols), 0..400), Just(count))
    })
}

proptest! {
    #[test]
    fn prop_strategies_agree_on_recorded_streams((prefix, count) in arb_stream()) {
        let tail: Vec<char> = "abcdefghijkl".chars().take(count).collect();
        let mut for_set = ReplaySource::new(prefix.clone(), tail.clone());
        let mut for_array = ReplaySource::new(prefix, tail);

        prop_assert_eq!(
            find_with_set(&mut for_set, count),
            find_with_array(&mut for_array, count)
        );
    }
}
