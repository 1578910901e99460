//! Hours / minutes / seconds picker for timers and countdowns.

use std::fmt;
use std::time::Duration;

use wheelpose_foundation::{ConfigError, ValidationError, Validator};

use crate::context::WheelContext;
use crate::widgets::wheel_picker::{WheelPickerConfig, WheelPickerState};

pub const DEFAULT_MAX_HOURS: u32 = 23;
/// Largest accepted `max_hours`. The hours wheel holds one label per hour.
pub const MAX_DURATION_HOURS: u32 = 9999;

/// Whole-second duration split into picker columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickerDuration {
    pub hours: u32,
    /// 0..60
    pub minutes: u8,
    /// 0..60
    pub seconds: u8,
}

impl PickerDuration {
    pub const ZERO: PickerDuration = PickerDuration {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn from_secs(total_seconds: u64) -> Self {
        Self {
            hours: u32::try_from(total_seconds / 3600).unwrap_or(u32::MAX),
            minutes: ((total_seconds / 60) % 60) as u8,
            seconds: (total_seconds % 60) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }
}

/// Sub-second parts are truncated.
impl From<Duration> for PickerDuration {
    fn from(duration: Duration) -> Self {
        Self::from_secs(duration.as_secs())
    }
}

impl From<PickerDuration> for Duration {
    fn from(duration: PickerDuration) -> Self {
        Duration::from_secs(duration.total_seconds())
    }
}

impl fmt::Display for PickerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DurationPickerConfig {
    pub max_hours: u32,
    /// Without a seconds wheel, durations are whole minutes.
    pub show_seconds: bool,
    pub wheel: WheelPickerConfig,
}

impl Default for DurationPickerConfig {
    fn default() -> Self {
        Self {
            max_hours: DEFAULT_MAX_HOURS,
            show_seconds: true,
            wheel: WheelPickerConfig::default(),
        }
    }
}

impl DurationPickerConfig {
    pub fn with_max_hours(mut self, max_hours: u32) -> Self {
        self.max_hours = max_hours;
        self
    }

    pub fn with_show_seconds(mut self, show_seconds: bool) -> Self {
        self.show_seconds = show_seconds;
        self
    }

    pub fn with_wheel(mut self, wheel: WheelPickerConfig) -> Self {
        self.wheel = wheel;
        self
    }
}

#[derive(Debug)]
pub struct DurationPicker {
    max_hours: u32,
    hours: WheelPickerState,
    minutes: WheelPickerState,
    seconds: Option<WheelPickerState>,
}

fn sexagesimal_labels() -> Vec<String> {
    (0..60).map(|value| format!("{value:02}")).collect()
}

impl DurationPicker {
    /// Hours beyond `max_hours` in `initial` are clamped. Fails when
    /// `max_hours` exceeds [`MAX_DURATION_HOURS`].
    pub fn new(
        name: &str,
        context: WheelContext,
        initial: PickerDuration,
        config: DurationPickerConfig,
    ) -> Result<Self, ConfigError> {
        let DurationPickerConfig {
            max_hours,
            show_seconds,
            wheel,
        } = config;

        Validator::new()
            .require(max_hours <= MAX_DURATION_HOURS, || {
                ValidationError::new(
                    "max_hours",
                    format!("max_hours {max_hours} exceeds {MAX_DURATION_HOURS}"),
                )
                .with_expected_range("0 to 9999")
            })
            .finish()
            .into_result()?;

        let hours = WheelPickerState::new(
            format!("{name}:hours"),
            context.clone(),
            (0..=max_hours).map(|hour| hour.to_string()).collect(),
            initial.hours.min(max_hours) as usize,
            wheel.clone(),
        )?;
        let minutes = WheelPickerState::new(
            format!("{name}:minutes"),
            context.clone(),
            sexagesimal_labels(),
            initial.minutes.min(59) as usize,
            wheel.clone(),
        )?;
        let seconds = if show_seconds {
            Some(WheelPickerState::new(
                format!("{name}:seconds"),
                context,
                sexagesimal_labels(),
                initial.seconds.min(59) as usize,
                wheel,
            )?)
        } else {
            None
        };

        Ok(Self {
            max_hours,
            hours,
            minutes,
            seconds,
        })
    }

    pub fn max_hours(&self) -> u32 {
        self.max_hours
    }

    pub fn duration(&self) -> PickerDuration {
        PickerDuration {
            hours: self.hours.selected_index() as u32,
            minutes: self.minutes.selected_index() as u8,
            seconds: self
                .seconds
                .as_ref()
                .map_or(0, |seconds| seconds.selected_index() as u8),
        }
    }

    /// Moves the wheels to `duration`, clamping hours to `max_hours` and
    /// minutes and seconds to 59.
    ///
    /// Returns whether any wheel moved.
    pub fn set_duration(&mut self, duration: PickerDuration) -> Result<bool, ConfigError> {
        if duration.hours > self.max_hours {
            log::debug!(
                "clamping {} hours to {}",
                duration.hours,
                self.max_hours
            );
        }
        let mut changed = self
            .hours
            .select(duration.hours.min(self.max_hours) as usize)?;
        changed |= self.minutes.select(duration.minutes.min(59) as usize)?;
        if let Some(seconds) = self.seconds.as_mut() {
            changed |= seconds.select(duration.seconds.min(59) as usize)?;
        }
        Ok(changed)
    }

    pub fn hours_mut(&mut self) -> &mut WheelPickerState {
        &mut self.hours
    }

    pub fn minutes_mut(&mut self) -> &mut WheelPickerState {
        &mut self.minutes
    }

    pub fn seconds_mut(&mut self) -> Option<&mut WheelPickerState> {
        self.seconds.as_mut()
    }

    pub fn advance(&mut self, frame_nanos: u64) -> bool {
        let mut changed = self.hours.advance(frame_nanos).is_some();
        changed |= self.minutes.advance(frame_nanos).is_some();
        if let Some(seconds) = self.seconds.as_mut() {
            changed |= seconds.advance(frame_nanos).is_some();
        }
        changed
    }
}

#[cfg(test)]
#[path = "../tests/duration_picker_tests.rs"]
mod tests;
