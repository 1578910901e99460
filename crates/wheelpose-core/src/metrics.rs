//! Redraw and calculation diagnostics.
//!
//! Designed for the per-frame picker path:
//! - Recording is a short critical section, never allocates on the hot path
//!   once a component name has been seen
//! - Nothing here influences rendering; a disabled recorder drops everything
//! - Bad inputs (negative or NaN durations) are discarded, never reported as errors

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use web_time::Instant;

use crate::collections::map::{new_map, HashMap};

/// Redraw count above which [`MetricsRecorder::log_warnings`] complains.
pub const DEFAULT_REDRAW_WARNING_THRESHOLD: u64 = 100;

/// Average calculation time a component must stay under to count as performant.
pub const DEFAULT_FRAME_BUDGET_MS: f64 = 16.0;

/// Number of calculation samples retained per component.
pub const DEFAULT_DURATION_HISTORY: usize = 1024;

const ENV_METRICS: &str = "WHEELPOSE_METRICS";
const ENV_REDRAW_WARN: &str = "WHEELPOSE_REDRAW_WARN";

/// Recorder configuration, fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsConfig {
    /// When false every recording call is a no-op and queries report zeros.
    pub enabled: bool,
    pub redraw_warning_threshold: u64,
    pub frame_budget_ms: f64,
    /// Oldest samples are dropped once a component holds this many.
    pub duration_history: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            redraw_warning_threshold: DEFAULT_REDRAW_WARNING_THRESHOLD,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            duration_history: DEFAULT_DURATION_HISTORY,
        }
    }
}

impl MetricsConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_redraw_warning_threshold(mut self, threshold: u64) -> Self {
        self.redraw_warning_threshold = threshold;
        self
    }

    pub fn with_frame_budget_ms(mut self, budget_ms: f64) -> Self {
        self.frame_budget_ms = budget_ms;
        self
    }

    /// Reads `WHEELPOSE_METRICS` (`0`, `off`, `false` disable) and
    /// `WHEELPOSE_REDRAW_WARN` (warning threshold) on top of the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_METRICS) {
            config.enabled = !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "off" | "false"
            );
        }
        if let Some(value) = lookup(ENV_REDRAW_WARN) {
            match value.trim().parse::<u64>() {
                Ok(threshold) => config.redraw_warning_threshold = threshold,
                Err(_) => log::warn!(
                    "{ENV_REDRAW_WARN}={value:?} is not a number, keeping threshold {}",
                    config.redraw_warning_threshold
                ),
            }
        }
        config
    }
}

/// Snapshot of one component's diagnostics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    pub redraw_count: u64,
    /// Retained calculation durations in milliseconds, oldest first.
    pub calculation_durations: Vec<f64>,
}

impl Metrics {
    pub fn average_duration_ms(&self) -> f64 {
        if self.calculation_durations.is_empty() {
            return 0.0;
        }
        self.calculation_durations.iter().sum::<f64>() / self.calculation_durations.len() as f64
    }

    pub fn max_duration_ms(&self) -> f64 {
        self.calculation_durations
            .iter()
            .copied()
            .fold(0.0_f64, f64::max)
    }

    /// Fewer than 100 redraws and an average calculation under 16ms.
    pub fn is_performant(&self) -> bool {
        self.is_performant_with(DEFAULT_REDRAW_WARNING_THRESHOLD, DEFAULT_FRAME_BUDGET_MS)
    }

    pub fn is_performant_with(&self, redraw_limit: u64, budget_ms: f64) -> bool {
        self.redraw_count < redraw_limit && self.average_duration_ms() < budget_ms
    }
}

#[derive(Debug, Default)]
struct ComponentMetrics {
    redraw_count: u64,
    durations: VecDeque<f64>,
}

impl ComponentMetrics {
    fn snapshot(&self) -> Metrics {
        Metrics {
            redraw_count: self.redraw_count,
            calculation_durations: self.durations.iter().copied().collect(),
        }
    }
}

/// Per-name redraw counters and calculation timers.
///
/// Construct one per application and share it through an `Arc`.
#[derive(Debug)]
pub struct MetricsRecorder {
    config: MetricsConfig,
    components: Mutex<HashMap<String, ComponentMetrics>>,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new(MetricsConfig::default())
    }
}

impl MetricsRecorder {
    pub fn new(config: MetricsConfig) -> Self {
        Self {
            config,
            components: Mutex::new(new_map()),
        }
    }

    pub fn disabled() -> Self {
        Self::new(MetricsConfig::disabled())
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    // Every guarded update leaves the map consistent, so a poisoned lock is still usable.
    fn components(&self) -> MutexGuard<'_, HashMap<String, ComponentMetrics>> {
        self.components
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn with_component(&self, name: &str, f: impl FnOnce(&mut ComponentMetrics)) {
        let mut components = self.components();
        match components.get_mut(name) {
            Some(component) => f(component),
            None => {
                let mut component = ComponentMetrics::default();
                f(&mut component);
                components.insert(name.to_owned(), component);
            }
        }
    }

    pub fn record_redraw(&self, component_name: &str) {
        if !self.config.enabled {
            return;
        }
        self.with_component(component_name, |component| {
            component.redraw_count = component.redraw_count.saturating_add(1);
        });
    }

    pub fn record_calculation(&self, operation_name: &str, duration_ms: f64) {
        if !self.config.enabled {
            return;
        }
        if duration_ms.is_nan() || duration_ms < 0.0 {
            log::trace!("dropping invalid duration {duration_ms} for {operation_name}");
            return;
        }
        let limit = self.config.duration_history.max(1);
        self.with_component(operation_name, |component| {
            while component.durations.len() >= limit {
                component.durations.pop_front();
            }
            component.durations.push_back(duration_ms);
        });
    }

    /// Zero-valued metrics for names never recorded.
    pub fn metrics(&self, name: &str) -> Metrics {
        if !self.config.enabled {
            return Metrics::default();
        }
        self.components()
            .get(name)
            .map(ComponentMetrics::snapshot)
            .unwrap_or_default()
    }

    /// Tracked names in lexical order.
    pub fn tracked_components(&self) -> Vec<String> {
        let mut names: Vec<String> = self.components().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn reset(&self) {
        self.components().clear();
    }

    /// Emits one warning per component whose redraw count exceeds the
    /// configured threshold. Returns how many warnings were logged.
    pub fn log_warnings(&self) -> usize {
        if !self.config.enabled {
            return 0;
        }
        let threshold = self.config.redraw_warning_threshold;
        let mut offenders: Vec<(String, u64)> = self
            .components()
            .iter()
            .filter(|(_, component)| component.redraw_count > threshold)
            .map(|(name, component)| (name.clone(), component.redraw_count))
            .collect();
        offenders.sort();
        for (name, count) in &offenders {
            log::warn!("{name} redrew {count} times (threshold {threshold})");
        }
        offenders.len()
    }

    /// One line per tracked component.
    pub fn summary(&self) -> String {
        let budget = self.config.frame_budget_ms;
        let threshold = self.config.redraw_warning_threshold;
        self.tracked_components()
            .iter()
            .map(|name| {
                let metrics = self.metrics(name);
                format!(
                    "{name}: redraws={} avg={:.2}ms max={:.2}ms performant={}",
                    metrics.redraw_count,
                    metrics.average_duration_ms(),
                    metrics.max_duration_ms(),
                    metrics.is_performant_with(threshold, budget)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs `f`, recording its wall time under `operation_name`.
pub fn measure_calculation<R>(
    recorder: &MetricsRecorder,
    operation_name: &str,
    f: impl FnOnce() -> R,
) -> R {
    if !recorder.is_enabled() {
        return f();
    }
    let started = Instant::now();
    let result = f();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    recorder.record_calculation(operation_name, elapsed_ms);
    result
}

#[cfg(test)]
#[path = "tests/metrics_tests.rs"]
mod tests;
