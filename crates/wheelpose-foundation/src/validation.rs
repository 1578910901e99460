//! Configuration checks for pickers and navigation bars.
//!
//! Rules never short-circuit: every violated rule is reported, in the order
//! the rules were applied. Nothing is clamped or corrected here; the widget
//! that asked turns an invalid result into a [`ConfigError`].

use std::fmt;

use smallvec::SmallVec;

/// Errors collected by one validation pass.
pub type ValidationErrors = SmallVec<[ValidationError; 2]>;

/// One violated rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub parameter: String,
    pub message: String,
    pub expected_range: Option<String>,
}

impl ValidationError {
    pub fn new(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            message: message.into(),
            expected_range: None,
        }
    }

    pub fn with_expected_range(mut self, expected_range: impl Into<String>) -> Self {
        self.expected_range = Some(expected_range.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.parameter, self.message)?;
        if let Some(expected) = &self.expected_range {
            write!(f, " (expected {expected})")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Empty for [`ValidationResult::Valid`].
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(errors) => errors.as_slice(),
        }
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(errors) => Err(ConfigError {
                errors: errors.into_vec(),
            }),
        }
    }
}

/// Rejected widget configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    errors: Vec<ValidationError>,
}

impl ConfigError {
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl From<ValidationError> for ConfigError {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

/// Accumulates rule violations.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, condition: bool, error: impl FnOnce() -> ValidationError) -> Self {
        if !condition {
            self.errors.push(error());
        }
        self
    }

    /// `len` items named `parameter` must not be empty.
    pub fn require_non_empty(self, parameter: &str, len: usize) -> Self {
        self.require(len > 0, || {
            ValidationError::new(parameter, format!("{parameter} cannot be empty"))
                .with_expected_range("At least 1")
        })
    }

    /// `index` must address one of `len` items.
    pub fn require_index_in_bounds(self, parameter: &str, index: i64, len: usize) -> Self {
        let in_bounds = index >= 0 && (index as u64) < len as u64;
        self.require(in_bounds, || {
            ValidationError::new(
                parameter,
                format!("{parameter} {index} is out of bounds for {len} items"),
            )
            .with_expected_range(format!("0 to {}", len as i128 - 1))
        })
    }

    pub fn finish(self) -> ValidationResult {
        if self.errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.errors)
        }
    }
}

/// Checks an item list and its selection.
pub fn validate<T>(items: &[T], selected_index: i64) -> ValidationResult {
    validate_named("items", items, selected_index)
}

/// [`validate`] with the list reported as `parameter` ("tabs", "values", ...).
pub fn validate_named<T>(parameter: &str, items: &[T], selected_index: i64) -> ValidationResult {
    Validator::new()
        .require_non_empty(parameter, items.len())
        .require_index_in_bounds("selected_index", selected_index, items.len())
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_configuration_passes() {
        assert_eq!(validate(&["a", "b", "c"], 0), ValidationResult::Valid);
        assert!(validate(&["a", "b", "c"], 2).is_valid());
    }

    #[test]
    fn empty_list_and_negative_index_report_both() {
        let result = validate::<&str>(&[], -1);
        let errors = result.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].parameter, "items");
        assert!(errors[0].message.contains("cannot be empty"));
        assert_eq!(errors[0].expected_range.as_deref(), Some("At least 1"));
        assert_eq!(errors[1].parameter, "selected_index");
        assert!(errors[1].message.contains("out of bounds"));
        for error in errors {
            assert!(!error.parameter.is_empty());
            assert!(!error.message.is_empty());
        }
    }

    #[test]
    fn index_just_past_the_end_is_rejected() {
        let items = [1, 2, 3, 4];
        assert!(validate(&items, 3).is_valid());
        let result = validate(&items, 4);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].expected_range.as_deref(), Some("0 to 3"));
    }

    #[test]
    fn parameter_name_is_configurable() {
        let result = validate_named::<u8>("tabs", &[], 0);
        assert_eq!(result.errors()[0].parameter, "tabs");
        assert!(result.errors()[0].message.starts_with("tabs cannot be empty"));
    }

    #[test]
    fn same_input_gives_same_result() {
        let a = validate::<u8>(&[], 7);
        let b = validate::<u8>(&[], 7);
        assert_eq!(a, b);
    }

    #[test]
    fn config_error_joins_messages() {
        let error = validate::<u8>(&[], 5)
            .into_result()
            .expect_err("empty list must be rejected");
        let text = error.to_string();
        assert!(text.starts_with("invalid configuration: items: items cannot be empty"));
        assert!(text.contains("; selected_index: selected_index 5 is out of bounds"));
        assert_eq!(error.errors().len(), 2);
    }

    #[test]
    fn custom_rules_compose() {
        let result = Validator::new()
            .require(60 % 7 == 0, || {
                ValidationError::new("minute_step", "must divide 60")
                    .with_expected_range("a divisor of 60")
            })
            .require_non_empty("values", 3)
            .finish();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].parameter, "minute_step");
    }
}
