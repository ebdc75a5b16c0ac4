//! Wall-clock timing of search calls.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Accumulated timing over one or more runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Number of timed runs
    pub runs: u32,
    /// Total elapsed time across all runs
    pub total: Duration,
}

impl Timing {
    /// Mean time per run.
    pub fn mean(&self) -> Duration {
        if self.runs == 0 {
            return Duration::ZERO;
        }
        self.total / self.runs
    }

    /// Mean time per run in nanoseconds, saturating at `u64::MAX`.
    pub fn mean_nanos(&self) -> u64 {
        u64::try_from(self.mean().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Times a single call of `f`.
pub fn time_once<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = black_box(f());
    (result, start.elapsed())
}

/// Times `runs` calls of `f` and returns the result of the last one.
///
/// `runs` is clamped to at least one.
pub fn time_runs<R>(runs: u32, mut f: impl FnMut() -> R) -> (R, Timing) {
    let runs = runs.max(1);
    let mut total = Duration::ZERO;

    let (mut result, elapsed) = time_once(&mut f);
    total += elapsed;
    for _ in 1..runs {
        let (next, elapsed) = time_once(&mut f);
        result = next;
        total += elapsed;
    }

    (result, Timing { runs, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_once_returns_result() {
        let (value, _elapsed) = time_once(|| 6 * 7);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_time_runs_counts_calls() {
        let mut calls = 0;
        let (last, timing) = time_runs(5, || {
            calls += 1;
            calls
        });

        assert_eq!(calls, 5);
        assert_eq!(last, 5);
        assert_eq!(timing.runs, 5);
        assert!(timing.mean() <= timing.total);
    }

    #[test]
    fn test_time_runs_clamps_zero() {
        let (_, timing) = time_runs(0, || ());
        assert_eq!(timing.runs, 1);
    }

    #[test]
    fn test_mean() {
        let timing = Timing {
            runs: 4,
            total: Duration::from_nanos(100),
        };
        assert_eq!(timing.mean_nanos(), 25);

        let empty = Timing {
            runs: 0,
            total: Duration::ZERO,
        };
        assert_eq!(empty.mean(), Duration::ZERO);
    }
}
