//! Time-of-day picker built from two or three wheels.

use std::fmt;

use wheelpose_foundation::{ConfigError, ValidationError, Validator};

use crate::context::WheelContext;
use crate::widgets::wheel_picker::{WheelPickerConfig, WheelPickerState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HourFormat {
    #[default]
    TwentyFourHour,
    /// Hours 12, 1..=11 plus an AM/PM wheel.
    TwelveHour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn label(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    fn index(self) -> usize {
        match self {
            Meridiem::Am => 0,
            Meridiem::Pm => 1,
        }
    }
}

/// Wall-clock time, stored on the 24 hour clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ConfigError> {
        Validator::new()
            .require(hour < 24, || {
                ValidationError::new("hour", format!("hour {hour} is out of range"))
                    .with_expected_range("0 to 23")
            })
            .require(minute < 60, || {
                ValidationError::new("minute", format!("minute {minute} is out of range"))
                    .with_expected_range("0 to 59")
            })
            .finish()
            .into_result()?;
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on the 12 hour clock, 1..=12.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    fn from_hour12(hour12_index: usize, meridiem: Meridiem, minute: u8) -> Self {
        let base = match meridiem {
            Meridiem::Am => 0,
            Meridiem::Pm => 12,
        };
        Self {
            hour: (base + hour12_index % 12) as u8,
            minute,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClockPickerConfig {
    pub format: HourFormat,
    /// Minutes between rows of the minute wheel. Must divide 60.
    pub minute_step: u8,
    pub wheel: WheelPickerConfig,
}

impl Default for ClockPickerConfig {
    fn default() -> Self {
        Self {
            format: HourFormat::default(),
            minute_step: 1,
            wheel: WheelPickerConfig::default(),
        }
    }
}

impl ClockPickerConfig {
    pub fn with_format(mut self, format: HourFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_minute_step(mut self, minute_step: u8) -> Self {
        self.minute_step = minute_step;
        self
    }

    pub fn with_wheel(mut self, wheel: WheelPickerConfig) -> Self {
        self.wheel = wheel;
        self
    }
}

/// Hour, minute and, on the 12 hour clock, AM/PM wheels.
#[derive(Debug)]
pub struct ClockPicker {
    format: HourFormat,
    minute_step: u8,
    hours: WheelPickerState,
    minutes: WheelPickerState,
    meridiem: Option<WheelPickerState>,
}

fn two_digit_labels(values: impl Iterator<Item = u32>) -> Vec<String> {
    values.map(|value| format!("{value:02}")).collect()
}

impl ClockPicker {
    /// Wheels are named `{name}:hour`, `{name}:minute` and `{name}:meridiem`.
    pub fn new(
        name: &str,
        context: WheelContext,
        initial: ClockTime,
        config: ClockPickerConfig,
    ) -> Result<Self, ConfigError> {
        let ClockPickerConfig {
            format,
            minute_step,
            wheel,
        } = config;
        Validator::new()
            .require(minute_step > 0 && 60 % minute_step == 0, || {
                ValidationError::new(
                    "minute_step",
                    format!("minute_step {minute_step} must divide 60"),
                )
                .with_expected_range("1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30 or 60")
            })
            .finish()
            .into_result()?;

        let hour_labels = match format {
            HourFormat::TwentyFourHour => two_digit_labels(0..24),
            HourFormat::TwelveHour => std::iter::once(12)
                .chain(1..12)
                .map(|hour| hour.to_string())
                .collect(),
        };
        let minute_labels = two_digit_labels((0..60).step_by(minute_step as usize));

        let hours = WheelPickerState::new(
            format!("{name}:hour"),
            context.clone(),
            hour_labels,
            Self::hour_index(format, initial),
            wheel.clone(),
        )?;
        let minutes = WheelPickerState::new(
            format!("{name}:minute"),
            context.clone(),
            minute_labels,
            (initial.minute / minute_step) as usize,
            wheel.clone(),
        )?;
        let meridiem = match format {
            HourFormat::TwentyFourHour => None,
            HourFormat::TwelveHour => Some(WheelPickerState::new(
                format!("{name}:meridiem"),
                context,
                vec![Meridiem::Am.label().to_owned(), Meridiem::Pm.label().to_owned()],
                initial.meridiem().index(),
                wheel,
            )?),
        };

        Ok(Self {
            format,
            minute_step,
            hours,
            minutes,
            meridiem,
        })
    }

    fn hour_index(format: HourFormat, time: ClockTime) -> usize {
        match format {
            HourFormat::TwentyFourHour => time.hour as usize,
            HourFormat::TwelveHour => (time.hour % 12) as usize,
        }
    }

    pub fn format(&self) -> HourFormat {
        self.format
    }

    pub fn minute_step(&self) -> u8 {
        self.minute_step
    }

    /// Time currently under the center rows.
    pub fn time(&self) -> ClockTime {
        let minute = self.minutes.selected_index() as u8 * self.minute_step;
        match (&self.format, &self.meridiem) {
            (HourFormat::TwelveHour, Some(meridiem)) => {
                let meridiem = if meridiem.selected_index() == 0 {
                    Meridiem::Am
                } else {
                    Meridiem::Pm
                };
                ClockTime::from_hour12(self.hours.selected_index(), meridiem, minute)
            }
            _ => ClockTime {
                hour: self.hours.selected_index() as u8,
                minute,
            },
        }
    }

    /// Moves every wheel to `time`, rounding the minute down to the step.
    ///
    /// Returns whether any wheel moved.
    pub fn set_time(&mut self, time: ClockTime) -> Result<bool, ConfigError> {
        let mut changed = self.hours.select(Self::hour_index(self.format, time))?;
        changed |= self
            .minutes
            .select((time.minute / self.minute_step) as usize)?;
        if let Some(meridiem) = self.meridiem.as_mut() {
            changed |= meridiem.select(time.meridiem().index())?;
        }
        Ok(changed)
    }

    pub fn hours(&self) -> &WheelPickerState {
        &self.hours
    }

    pub fn hours_mut(&mut self) -> &mut WheelPickerState {
        &mut self.hours
    }

    pub fn minutes(&self) -> &WheelPickerState {
        &self.minutes
    }

    pub fn minutes_mut(&mut self) -> &mut WheelPickerState {
        &mut self.minutes
    }

    /// `None` on the 24 hour clock.
    pub fn meridiem_mut(&mut self) -> Option<&mut WheelPickerState> {
        self.meridiem.as_mut()
    }

    /// Advances every running snap. Returns whether the time changed.
    pub fn advance(&mut self, frame_nanos: u64) -> bool {
        let mut changed = self.hours.advance(frame_nanos).is_some();
        changed |= self.minutes.advance(frame_nanos).is_some();
        if let Some(meridiem) = self.meridiem.as_mut() {
            changed |= meridiem.advance(frame_nanos).is_some();
        }
        changed
    }

    pub fn is_snapping(&self) -> bool {
        self.hours.is_snapping()
            || self.minutes.is_snapping()
            || self.meridiem.as_ref().is_some_and(WheelPickerState::is_snapping)
    }
}

#[cfg(test)]
#[path = "../tests/clock_picker_tests.rs"]
mod tests;
