use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use wheelpose_animation::AnimationCoordinator;
use wheelpose_core::collections::map::{new_set, HashSet};
use wheelpose_core::MetricsRecorder;
use wheelpose_foundation::{LabelCache, LabelMeasurer, MonospacedLabelMeasurer};

use crate::haptics::{HapticFeedback, NoHaptics};

/// Services shared by every picker and navigation bar of an application.
///
/// Build one at startup and clone it into each widget. Clones share the same
/// cache, coordinator and recorder.
///
/// Widget names key metrics and animation ids, so a name can belong to only
/// one live widget per context.
#[derive(Clone)]
pub struct WheelContext {
    label_cache: Arc<LabelCache>,
    coordinator: Arc<AnimationCoordinator>,
    metrics: Arc<MetricsRecorder>,
    measurer: Arc<dyn LabelMeasurer + Send + Sync>,
    haptics: Arc<dyn HapticFeedback>,
    names: Arc<Mutex<HashSet<String>>>,
}

impl Default for WheelContext {
    fn default() -> Self {
        Self {
            label_cache: Arc::new(LabelCache::default()),
            coordinator: Arc::new(AnimationCoordinator::default()),
            metrics: Arc::new(MetricsRecorder::default()),
            measurer: Arc::new(MonospacedLabelMeasurer),
            haptics: Arc::new(NoHaptics),
            names: Arc::new(Mutex::new(new_set())),
        }
    }
}

impl fmt::Debug for WheelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelContext")
            .field("label_cache", &self.label_cache)
            .field("coordinator", &self.coordinator)
            .field("metrics_enabled", &self.metrics.is_enabled())
            .finish_non_exhaustive()
    }
}

impl WheelContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label_cache(mut self, label_cache: Arc<LabelCache>) -> Self {
        self.label_cache = label_cache;
        self
    }

    pub fn with_coordinator(mut self, coordinator: Arc<AnimationCoordinator>) -> Self {
        self.coordinator = coordinator;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_measurer(mut self, measurer: Arc<dyn LabelMeasurer + Send + Sync>) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn with_haptics(mut self, haptics: Arc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn label_cache(&self) -> &LabelCache {
        &self.label_cache
    }

    pub fn coordinator(&self) -> &AnimationCoordinator {
        &self.coordinator
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    pub fn measurer(&self) -> &(dyn LabelMeasurer + Send + Sync) {
        self.measurer.as_ref()
    }

    pub fn haptics(&self) -> &dyn HapticFeedback {
        self.haptics.as_ref()
    }

    /// Reserves `name` for a live widget. Returns `false` if it is taken.
    pub(crate) fn claim_name(&self, name: &str) -> bool {
        self.names
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_owned())
    }

    pub(crate) fn release_name(&self, name: &str) {
        self.names
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}
