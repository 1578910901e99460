//! Drives a clock picker, a timer and a navigation bar through a scripted
//! session, then prints the diagnostics the widgets collected.
//!
//! `WHEELPOSE_METRICS=0` turns metrics off and `WHEELPOSE_REDRAW_WARN` lowers
//! the redraw warning threshold. `RUST_LOG=debug` shows selection changes.

use std::sync::Arc;

use wheelpose_animation::AnimationCoordinator;
use wheelpose_core::{MetricsConfig, MetricsRecorder};
use wheelpose_foundation::LabelCache;
use wheelpose_ui::prelude::*;
use wheelpose_ui::{
    ClockPickerConfig, ConfigError, DurationPickerConfig, HapticError, HourFormat,
};

const FRAME_NANOS: u64 = 16_666_667;

/// Prints instead of vibrating.
struct ConsoleHaptics;

impl HapticFeedback for ConsoleHaptics {
    fn perform(&self, kind: HapticFeedbackType) -> Result<(), HapticError> {
        println!("  * haptic: {kind:?}");
        Ok(())
    }
}

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

/// One simulated gesture: a drag split over several frames, then a release
/// and frames until every snap settles.
fn fling(picker: &mut WheelPickerState, total_px: f32, frames: u32, clock: &mut u64) {
    let step = total_px / frames as f32;
    for _ in 0..frames {
        picker.drag(step);
        picker.frame();
        *clock += FRAME_NANOS;
    }
    picker.release();
    while picker.is_snapping() {
        picker.advance(*clock);
        picker.frame();
        *clock += FRAME_NANOS;
    }
}

fn run() -> Result<(), ConfigError> {
    let metrics_config = MetricsConfig::from_env();
    let context = WheelContext::new()
        .with_label_cache(Arc::new(LabelCache::with_capacity(64)))
        .with_coordinator(Arc::new(AnimationCoordinator::new()))
        .with_metrics(Arc::new(MetricsRecorder::new(metrics_config)))
        .with_haptics(Arc::new(ConsoleHaptics));

    let mut tabs = NavigationBar::new(
        "tabs",
        context.clone(),
        vec![
            NavTab::new("Alarm").with_icon("alarm"),
            NavTab::new("Timer").with_icon("timer").with_badge(1),
        ],
        0,
    )?;
    let mut alarm = ClockPicker::new(
        "alarm",
        context.clone(),
        ClockTime::new(7, 0)?,
        ClockPickerConfig::default()
            .with_format(HourFormat::TwelveHour)
            .with_minute_step(5),
    )?;
    let mut timer = DurationPicker::new(
        "timer",
        context.clone(),
        PickerDuration::from_secs(5 * 60),
        DurationPickerConfig::default(),
    )?;

    let mut clock = 0;
    println!("alarm starts at {}", alarm.time());
    fling(alarm.hours_mut(), 95.0, 12, &mut clock);
    fling(alarm.minutes_mut(), 130.0, 20, &mut clock);
    println!("alarm set to {}", alarm.time());

    tabs.select(1)?;
    tabs.finish_transition();
    tabs.set_badge(1, None);
    println!("switched to {}", tabs.selected_tab().label);

    fling(timer.minutes_mut(), -70.0, 10, &mut clock);
    if let Some(seconds) = timer.seconds_mut() {
        fling(seconds, 600.0, 30, &mut clock);
    }
    println!("timer set to {}", timer.duration());

    let cache = context.label_cache().stats();
    println!(
        "label cache: {} entries, {} hits, {} misses, {} evictions",
        cache.len, cache.hits, cache.misses, cache.evictions
    );

    let metrics = context.metrics();
    if metrics.is_enabled() {
        println!("{}", metrics.summary());
        let offenders = metrics.log_warnings();
        if offenders > 0 {
            log::warn!("{offenders} component(s) over budget");
        }
    }
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("picker-demo: {err}");
        std::process::exit(1);
    }
}
