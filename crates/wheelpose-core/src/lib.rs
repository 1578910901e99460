//! Shared collections and diagnostics for the Wheelpose picker engine.
//!
//! Everything here is safe to share between picker instances: the recorder is
//! `Send + Sync` and meant to be wrapped in an `Arc` by the application.

pub mod collections;
pub mod hash;
pub mod metrics;

pub use metrics::{
    measure_calculation, Metrics, MetricsConfig, MetricsRecorder, DEFAULT_DURATION_HISTORY,
    DEFAULT_FRAME_BUDGET_MS, DEFAULT_REDRAW_WARNING_THRESHOLD,
};

pub mod prelude {
    pub use crate::collections::map::{HashMap, HashSet};
    pub use crate::metrics::{Metrics, MetricsConfig, MetricsRecorder};
}
