//! Tick-loop timing instrumentation.
//!
//! The host loop is expected to call [`Game::tick`](crate::game::Game::tick)
//! at 60 Hz, which leaves each tick a 16.67 ms wall-clock budget. This
//! module watches that budget:
//!
//! - [`PerfMonitor`]: rolling window of recent tick times plus
//!   per-operation statistics (average, p95, max)
//! - [`ScopedTimer`]: RAII timer that warns when a scope runs long
//! - [`profile_scope!`] / [`profile_function!`]: instrumentation points
//!   that compile to nothing unless the `profiling` feature is on
//!
//! Everything here measures wall-clock time via [`Instant`]; the simulated
//! game clock advanced by `tick(dt)` is a separate notion entirely.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, warn};
#[cfg(feature = "profiling")]
use tracing::trace;

// ============================================================================
// Budgets and windows
// ============================================================================

/// Wall-clock budget for one tick of the 60 Hz host loop, in milliseconds.
pub const TARGET_TICK_MS: f64 = 16.67;

/// How many recent tick times the monitor retains.
const TICK_WINDOW: usize = 60;

/// How many recent samples each operation retains.
const OP_WINDOW: usize = 100;

/// A tick is counted as slow once it exceeds this multiple of the budget.
const SLOW_TICK_FACTOR: f64 = 2.0;

fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

// ============================================================================
// Profiling macros
// ============================================================================

/// Time the enclosing scope under the given name.
///
/// Expands to a [`ScopedTimer`] when the `profiling` feature is enabled
/// and to nothing otherwise. An optional second argument overrides the
/// warning threshold in milliseconds.
///
/// # Example
/// ```ignore
/// use glyphgate::profile_scope;
///
/// fn rasterize_stroke() {
///     profile_scope!("rasterize_stroke");
///     // ... drawing code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Time the current function under its own module path.
///
/// # Example
/// ```ignore
/// use glyphgate::profile_function;
///
/// fn deliver_classification() {
///     profile_function!();
///     // ... delivery code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!($crate::function_name!());
    };
}

/// Resolve the module-qualified name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Trim the "::f" suffix left by the probe function
        &name[..name.len() - 3]
    }};
}

pub use profile_function;
pub use profile_scope;

// ============================================================================
// Per-operation statistics
// ============================================================================

/// Timing statistics for one named operation.
///
/// Retains the last `OP_WINDOW` samples in a ring; the count and maximum
/// cover the whole run.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    /// Sample ring, oldest at `cursor` once full
    window: Vec<f64>,
    /// Next slot to overwrite when the ring is full
    cursor: usize,
    /// Samples recorded over the whole run
    count: u64,
    /// Largest sample ever recorded
    max_ms: f64,
}

impl OperationStats {
    /// Add one sample in milliseconds.
    pub fn record(&mut self, ms: f64) {
        if self.window.len() < OP_WINDOW {
            self.window.push(ms);
        } else {
            self.window[self.cursor] = ms;
            self.cursor = (self.cursor + 1) % OP_WINDOW;
        }
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Mean over the retained window.
    pub fn average(&self) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        self.window.iter().sum::<f64>() / self.window.len() as f64
    }

    /// 95th percentile over the retained window.
    pub fn p95(&self) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        let mut sorted = self.window.clone();
        sorted.sort_by(f64::total_cmp);
        let idx = ((sorted.len() as f64) * 0.95) as usize;
        sorted[idx.min(sorted.len() - 1)]
    }

    /// Samples recorded over the whole run.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Largest sample ever recorded.
    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }
}

// ============================================================================
// Tick monitor
// ============================================================================

/// Rolling tick-time tracker with per-operation breakdowns.
///
/// The orchestrator brackets every tick with [`begin_tick`](Self::begin_tick)
/// and [`end_tick`](Self::end_tick); subsystems report named timings through
/// [`record_operation`](Self::record_operation).
#[derive(Default)]
pub struct PerfMonitor {
    /// Tick-time ring, milliseconds
    window: Vec<f64>,
    /// Next slot to overwrite when the ring is full
    cursor: usize,
    /// Start of the tick currently in flight
    started: Option<Instant>,
    /// Ticks that blew `SLOW_TICK_FACTOR` times the budget
    slow_ticks: u64,
    /// Ticks tracked over the whole run
    ticks: u64,
    /// Named operation timings
    ops: HashMap<&'static str, OperationStats>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a tick.
    pub fn begin_tick(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Mark the end of a tick and return its duration in milliseconds.
    ///
    /// Returns `None` when no tick is in flight.
    pub fn end_tick(&mut self) -> Option<f64> {
        let started = self.started.take()?;
        let ms = ms_since(started);

        if self.window.len() < TICK_WINDOW {
            self.window.push(ms);
        } else {
            self.window[self.cursor] = ms;
            self.cursor = (self.cursor + 1) % TICK_WINDOW;
        }
        self.ticks += 1;

        if ms > TARGET_TICK_MS * SLOW_TICK_FACTOR {
            self.slow_ticks += 1;
            warn!(elapsed_ms = ms, budget_ms = TARGET_TICK_MS, "tick over budget");
        }

        Some(ms)
    }

    /// Report one timing for a named operation.
    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.ops.entry(name).or_default().record(elapsed_ms);
    }

    /// Mean tick time over the retained window.
    pub fn average_tick_time(&self) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        self.window.iter().sum::<f64>() / self.window.len() as f64
    }

    /// Worst tick time in the retained window.
    pub fn max_tick_time(&self) -> f64 {
        self.window.iter().fold(0.0_f64, |worst, &ms| worst.max(ms))
    }

    /// Share of all ticks, in percent, that ran over budget.
    pub fn slow_tick_percentage(&self) -> f64 {
        if self.ticks == 0 {
            return 0.0;
        }
        (self.slow_ticks as f64 / self.ticks as f64) * 100.0
    }

    /// Statistics for one named operation, if it has reported any.
    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.ops.get(name)
    }

    /// Statistics for every operation that has reported.
    pub fn all_operation_stats(&self) -> &HashMap<&'static str, OperationStats> {
        &self.ops
    }

    /// Emit a warning with the worst offenders when the average tick runs
    /// over budget. Quiet otherwise.
    pub fn log_summary_if_slow(&self) {
        let avg = self.average_tick_time();
        if avg <= TARGET_TICK_MS {
            return;
        }
        warn!(
            avg_ms = avg,
            max_ms = self.max_tick_time(),
            slow_percent = self.slow_tick_percentage(),
            "tick average over budget"
        );

        let mut ranked: Vec<_> = self.ops.iter().collect();
        ranked.sort_by(|a, b| b.1.average().total_cmp(&a.1.average()));
        for (name, stats) in ranked.into_iter().take(5) {
            // Sub-0.1ms operations cannot be the problem
            if stats.average() > 0.1 {
                debug!(
                    op = *name,
                    avg_ms = stats.average(),
                    p95_ms = stats.p95(),
                    max_ms = stats.max_ms(),
                    calls = stats.count(),
                    "slow operation profile"
                );
            }
        }
    }

    /// Drop every sample and counter.
    pub fn reset(&mut self) {
        self.window.clear();
        self.cursor = 0;
        self.started = None;
        self.slow_ticks = 0;
        self.ticks = 0;
        self.ops.clear();
    }
}

// ============================================================================
// Scoped timer
// ============================================================================

/// RAII timer that reports on drop.
///
/// Without the `profiling` feature, a scope that outlives its threshold
/// logs a warning. With it, timers additionally track nesting depth so
/// trace output indents like a call tree.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

#[cfg(feature = "profiling")]
thread_local! {
    static TIMER_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

impl ScopedTimer {
    /// Time a scope, warning if it runs longer than `threshold_ms`.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        #[cfg(feature = "profiling")]
        let depth = TIMER_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            #[cfg(feature = "profiling")]
            depth,
        }
    }

    /// Time a scope against the full tick budget.
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, TARGET_TICK_MS)
    }

    /// Time a scope against the 1 ms profiling threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Time elapsed so far, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        ms_since(self.start)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        {
            TIMER_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            if elapsed_ms > self.threshold_ms {
                let indent = "  ".repeat(self.depth);
                trace!("{}{}: {:.2}ms", indent, self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        if elapsed_ms > self.threshold_ms {
            warn!(
                scope = self.name,
                elapsed_ms,
                threshold_ms = self.threshold_ms,
                "scope over budget"
            );
        }
    }
}

// ============================================================================
// One-shot measurement
// ============================================================================

/// Run a closure, returning its result and the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, ms_since(start))
}

/// Run a closure, warning if it takes longer than `threshold_ms`.
///
/// # Example
/// ```ignore
/// let verdict = measure_and_log("classify", 5.0, || classifier.classify(&bitmap));
/// ```
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(operation = name, elapsed_ms, threshold_ms, "operation over budget");
    }
    result
}
