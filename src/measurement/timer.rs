//! Clock capability and elapsed-time measurement.
//!
//! Time is never read from an ambient global. Everything that times work
//! receives a [`Clock`]:
//! - [`MonotonicClock`]: `std::time::Instant` relative to a fixed origin
//! - [`ScriptedClock`]: replays scripted elapsed durations, for tests

use std::cell::Cell;
use std::hint::black_box as std_black_box;
use std::time::Instant;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Use this to wrap results of measured calls so the compiler cannot
/// discard the computation or hoist it out of the timed region.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Monotonic time source in milliseconds.
///
/// Readings are relative to an arbitrary origin; only differences between
/// two readings of the same clock are meaningful.
pub trait Clock {
    /// Milliseconds elapsed since the clock's origin.
    fn now_ms(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

/// Wall-clock monotonic time backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Deterministic clock that replays a script of elapsed durations.
///
/// Each timed region reads the clock twice (start, end). The script is laid
/// out so that the `k`-th start/end pair is exactly `durations[k]` apart.
/// Once the script runs out the clock stands still, so further regions
/// measure zero.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    readings: Vec<f64>,
    cursor: Cell<usize>,
}

impl ScriptedClock {
    /// Build a clock from the elapsed milliseconds of successive timed regions.
    pub fn from_durations<I>(durations: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut readings = Vec::new();
        let mut now = 0.0;
        for d in durations {
            // Start of this region equals the end of the previous one.
            readings.push(now);
            now += d;
            readings.push(now);
        }
        Self {
            readings,
            cursor: Cell::new(0),
        }
    }

    /// Number of times the clock has been read.
    pub fn reads(&self) -> usize {
        self.cursor.get()
    }
}

impl Clock for ScriptedClock {
    fn now_ms(&self) -> f64 {
        let idx = self.cursor.get();
        self.cursor.set(idx + 1);
        match self.readings.get(idx) {
            Some(&t) => t,
            None => self.readings.last().copied().unwrap_or(0.0),
        }
    }
}

/// Times closures against a [`Clock`].
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = MonotonicClock> {
    clock: C,
}

impl Timer<MonotonicClock> {
    /// Create a timer backed by a fresh monotonic clock.
    pub fn monotonic() -> Self {
        Self::new(MonotonicClock::new())
    }
}

impl Default for Timer<MonotonicClock> {
    fn default() -> Self {
        Self::monotonic()
    }
}

impl<C: Clock> Timer<C> {
    /// Create a timer reading the given clock.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run `f` once and return its output together with the elapsed milliseconds.
    #[inline]
    pub fn time<F, T>(&self, f: F) -> (T, f64)
    where
        F: FnOnce() -> T,
    {
        let start = self.clock.now_ms();
        let out = black_box(f());
        let end = self.clock.now_ms();
        (out, (end - start).max(0.0))
    }

    /// Measure the execution time of a function in milliseconds.
    #[inline]
    pub fn measure_ms<F, T>(&self, f: F) -> f64
    where
        F: FnOnce() -> T,
    {
        self.time(f).1
    }

    /// Measure a fallible function; its error is returned unchanged.
    #[inline]
    pub fn try_measure_ms<F, T, E>(&self, f: F) -> Result<f64, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let (out, elapsed) = self.time(f);
        out.map(|_| elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_scripted_clock_replays_durations() {
        let timer = Timer::new(ScriptedClock::from_durations([2.0, 0.5, 7.25]));
        assert_eq!(timer.measure_ms(|| 1), 2.0);
        assert_eq!(timer.measure_ms(|| 1), 0.5);
        assert_eq!(timer.measure_ms(|| 1), 7.25);
        // Exhausted: the clock stands still.
        assert_eq!(timer.measure_ms(|| 1), 0.0);
        assert_eq!(timer.clock().reads(), 8);
    }

    #[test]
    fn test_time_returns_output() {
        let timer = Timer::new(ScriptedClock::from_durations([3.0]));
        let (value, elapsed) = timer.time(|| 40 + 2);
        assert_eq!(value, 42);
        assert_eq!(elapsed, 3.0);
    }

    #[test]
    fn test_try_measure_propagates_error() {
        let timer = Timer::monotonic();
        let result: Result<f64, &str> = timer.try_measure_ms(|| Err::<(), _>("boom"));
        assert_eq!(result, Err("boom"));
    }

    #[test]
    fn test_timer_through_reference() {
        let clock = ScriptedClock::from_durations([1.5]);
        let timer = Timer::new(&clock);
        assert_eq!(timer.measure_ms(|| ()), 1.5);
        assert_eq!(clock.reads(), 2);
    }
}
