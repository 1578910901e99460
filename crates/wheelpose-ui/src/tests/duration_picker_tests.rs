use super::*;

fn duration(hours: u32, minutes: u8, seconds: u8) -> PickerDuration {
    PickerDuration {
        hours,
        minutes,
        seconds,
    }
}

#[test]
fn converts_to_and_from_std_duration() {
    let split = PickerDuration::from(Duration::from_millis(5_025_900));
    assert_eq!(split, duration(1, 23, 45));
    assert_eq!(split.total_seconds(), 5_025);
    assert_eq!(Duration::from(split), Duration::from_secs(5_025));
    assert_eq!(split.to_string(), "1:23:45");
    assert_eq!(PickerDuration::from_secs(0), PickerDuration::ZERO);
}

#[test]
fn picker_reads_back_initial_duration() {
    let picker = DurationPicker::new(
        "timer",
        WheelContext::default(),
        duration(2, 5, 30),
        DurationPickerConfig::default(),
    )
    .expect("valid picker");

    assert_eq!(picker.max_hours(), DEFAULT_MAX_HOURS);
    assert_eq!(picker.duration(), duration(2, 5, 30));
}

#[test]
fn initial_hours_are_clamped() {
    let picker = DurationPicker::new(
        "timer",
        WheelContext::default(),
        duration(99, 0, 0),
        DurationPickerConfig::default().with_max_hours(12),
    )
    .expect("valid picker");
    assert_eq!(picker.duration().hours, 12);
}

#[test]
fn max_hours_is_bounded() {
    let err = DurationPicker::new(
        "timer",
        WheelContext::default(),
        PickerDuration::ZERO,
        DurationPickerConfig::default().with_max_hours(u32::MAX),
    )
    .expect_err("too many hours");
    assert_eq!(err.errors().len(), 1);
    assert_eq!(err.errors()[0].parameter, "max_hours");

    let mut picker = DurationPicker::new(
        "timer",
        WheelContext::default(),
        duration(MAX_DURATION_HOURS, 0, 0),
        DurationPickerConfig::default().with_max_hours(MAX_DURATION_HOURS),
    )
    .expect("largest accepted bound");
    assert_eq!(picker.duration().hours, MAX_DURATION_HOURS);
    assert_eq!(picker.hours_mut().values().len(), 10_000);
}

#[test]
fn without_seconds_wheel_durations_are_whole_minutes() {
    let mut picker = DurationPicker::new(
        "timer",
        WheelContext::default(),
        duration(0, 10, 59),
        DurationPickerConfig::default().with_show_seconds(false),
    )
    .expect("valid picker");

    assert!(picker.seconds_mut().is_none());
    assert_eq!(picker.duration(), duration(0, 10, 0));
}

#[test]
fn set_duration_clamps_every_column() {
    let mut picker = DurationPicker::new(
        "timer",
        WheelContext::default(),
        PickerDuration::ZERO,
        DurationPickerConfig::default(),
    )
    .expect("valid picker");

    assert_eq!(picker.set_duration(duration(40, 75, 9)), Ok(true));
    assert_eq!(picker.duration(), duration(23, 59, 9));
    assert_eq!(picker.set_duration(duration(23, 59, 9)), Ok(false));
}

#[test]
fn wheels_drive_the_duration() {
    let mut picker = DurationPicker::new(
        "timer",
        WheelContext::default(),
        PickerDuration::ZERO,
        DurationPickerConfig::default(),
    )
    .expect("valid picker");

    picker.hours_mut().drag(80.0);
    if let Some(seconds) = picker.seconds_mut() {
        seconds.drag(400.0);
    }
    assert_eq!(picker.duration(), duration(2, 0, 10));
}
