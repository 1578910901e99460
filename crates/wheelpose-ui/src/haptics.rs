//! Haptic feedback requests.
//!
//! Haptics are optional: a failing sink must never disturb scrolling, so
//! widgets route every request through [`perform_or_log`].

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticFeedbackType {
    /// A wheel settled on a different value, or a tab was selected.
    SelectionChange,
    LongPress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HapticError {
    /// The device has no vibrator or the user disabled haptics.
    Unsupported,
    Platform(String),
}

impl fmt::Display for HapticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HapticError::Unsupported => write!(f, "haptic feedback unsupported"),
            HapticError::Platform(reason) => write!(f, "haptic feedback failed: {reason}"),
        }
    }
}

impl std::error::Error for HapticError {}

/// Platform haptics supplied by the host.
pub trait HapticFeedback: Send + Sync {
    fn perform(&self, kind: HapticFeedbackType) -> Result<(), HapticError>;
}

/// Sink that does nothing; the default for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn perform(&self, _kind: HapticFeedbackType) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Performs `kind`, logging and discarding any failure.
///
/// Returns whether the feedback was delivered.
pub fn perform_or_log(haptics: &dyn HapticFeedback, kind: HapticFeedbackType) -> bool {
    match haptics.perform(kind) {
        Ok(()) => true,
        Err(HapticError::Unsupported) => {
            log::debug!("skipping {kind:?}: haptics unsupported");
            false
        }
        Err(err) => {
            log::warn!("{kind:?} feedback dropped: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl HapticFeedback for Broken {
        fn perform(&self, _kind: HapticFeedbackType) -> Result<(), HapticError> {
            Err(HapticError::Platform("vibrator service died".into()))
        }
    }

    #[test]
    fn failures_are_swallowed() {
        assert!(!perform_or_log(&Broken, HapticFeedbackType::SelectionChange));
        assert!(perform_or_log(&NoHaptics, HapticFeedbackType::SelectionChange));
    }

    #[test]
    fn errors_render_reason() {
        assert_eq!(
            HapticError::Platform("busy".into()).to_string(),
            "haptic feedback failed: busy"
        );
    }
}
