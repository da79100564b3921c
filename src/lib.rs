use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use wasm_bindgen::prelude::*;

/// Domain thresholds and the fixed example payload.
pub mod defaults {
    /// Minimum accepted value for continuous fields (maximum drag).
    pub const MIN_CONTINUOUS: f64 = 0.01;
    /// Minimum accepted value for count-like fields (settings).
    pub const MIN_COUNT: f64 = 1.0;

    pub const EXAMPLE_MAX_DRAG: f64 = 100.0;
    pub const EXAMPLE_NUM_SETTINGS: f64 = 10.0;
    pub const EXAMPLE_DESIRED_SETTING: f64 = 3.0;
}

// Longest leading decimal literal, the way a browser's parseFloat reads it.
static LEADING_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());

/// The three inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MaxDrag,
    NumSettings,
    DesiredSetting,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::MaxDrag, Field::NumSettings, Field::DesiredSetting];

    /// Display label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::MaxDrag => "Maximum Drag",
            Field::NumSettings => "Number of Settings",
            Field::DesiredSetting => "Desired Setting",
        }
    }

    /// Smallest value that passes the field-level check.
    pub fn minimum(self) -> f64 {
        match self {
            Field::MaxDrag => defaults::MIN_CONTINUOUS,
            Field::NumSettings | Field::DesiredSetting => defaults::MIN_COUNT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragInputs {
    pub max_drag: f64,
    pub num_settings: f64,
    pub desired_setting: f64,
}

impl DragInputs {
    pub const EXAMPLE: DragInputs = DragInputs {
        max_drag: defaults::EXAMPLE_MAX_DRAG,
        num_settings: defaults::EXAMPLE_NUM_SETTINGS,
        desired_setting: defaults::EXAMPLE_DESIRED_SETTING,
    };

    pub fn new(max_drag: f64, num_settings: f64, desired_setting: f64) -> Self {
        Self {
            max_drag,
            num_settings,
            desired_setting,
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::MaxDrag => self.max_drag,
            Field::NumSettings => self.num_settings,
            Field::DesiredSetting => self.desired_setting,
        }
    }

    /// Copy of these inputs with one field replaced.
    pub fn with(self, field: Field, value: f64) -> Self {
        match field {
            Field::MaxDrag => Self { max_drag: value, ..self },
            Field::NumSettings => Self { num_settings: value, ..self },
            Field::DesiredSetting => Self { desired_setting: value, ..self },
        }
    }

    /// Whether every precondition of a real calculation holds.
    pub fn is_computable(&self) -> bool {
        self.max_drag > 0.0
            && self.num_settings > 0.0
            && self.desired_setting > 0.0
            && self.desired_setting <= self.num_settings
    }
}

/// Outcome of a calculation. When `is_valid` is false both numbers are the
/// zero sentinel, not computed values.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub drag_per_setting: f64,
    pub final_result: f64,
    pub is_valid: bool,
}

impl DragResult {
    pub const INVALID: DragResult = DragResult {
        drag_per_setting: 0.0,
        final_result: 0.0,
        is_valid: false,
    };
}

/// Compute the drag at the desired setting.
///
/// Never fails: inputs that violate any precondition yield
/// [`DragResult::INVALID`].
pub fn calculate(inputs: &DragInputs) -> DragResult {
    if !inputs.is_computable() {
        return DragResult::INVALID;
    }

    let drag_per_setting = inputs.max_drag / inputs.num_settings;
    let final_result = drag_per_setting * inputs.desired_setting;

    DragResult {
        drag_per_setting,
        final_result,
        is_valid: true,
    }
}

/// Advisory validation message attached to a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Value absent or zero. Unparseable text lands here too.
    Required { field: String },
    BelowMinimum { field: String, minimum: f64 },
    ExceedsSettings,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required { field } => write!(f, "{} is required", field),
            FieldError::BelowMinimum { field, minimum } => write!(
                f,
                "{} must be a positive number greater than {}",
                field, minimum
            ),
            FieldError::ExceedsSettings => write!(
                f,
                "Desired setting cannot be greater than number of settings"
            ),
        }
    }
}

impl std::error::Error for FieldError {}

/// Check a single value against its minimum.
pub fn validate_field(value: f64, field_label: &str, minimum: f64) -> Option<FieldError> {
    if value == 0.0 || value.is_nan() {
        return Some(FieldError::Required {
            field: field_label.to_string(),
        });
    }
    if value < minimum {
        return Some(FieldError::BelowMinimum {
            field: field_label.to_string(),
            minimum,
        });
    }
    None
}

/// Check that the desired setting fits within the number of settings.
/// A non-positive setting count is left to its own field check.
pub fn validate_cross_field(desired_setting: f64, num_settings: f64) -> Option<FieldError> {
    if desired_setting > num_settings && num_settings > 0.0 {
        Some(FieldError::ExceedsSettings)
    } else {
        None
    }
}

/// Field check for the desired setting, falling back to the cross-field
/// check only when the value itself is acceptable.
fn validate_desired_setting(desired_setting: f64, num_settings: f64) -> Option<FieldError> {
    let field = Field::DesiredSetting;
    validate_field(desired_setting, field.label(), field.minimum())
        .or_else(|| validate_cross_field(desired_setting, num_settings))
}

/// Current validation message per field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorSet {
    pub max_drag: Option<FieldError>,
    pub num_settings: Option<FieldError>,
    pub desired_setting: Option<FieldError>,
}

impl ErrorSet {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::MaxDrag => self.max_drag.as_ref(),
            Field::NumSettings => self.num_settings.as_ref(),
            Field::DesiredSetting => self.desired_setting.as_ref(),
        }
    }

    /// Message for `field`, empty when the field is valid.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn is_clear(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_none())
    }

    fn set(&mut self, field: Field, error: Option<FieldError>) {
        match field {
            Field::MaxDrag => self.max_drag = error,
            Field::NumSettings => self.num_settings = error,
            Field::DesiredSetting => self.desired_setting = error,
        }
    }
}

/// Normalize raw field text to a number.
///
/// Reads the leading decimal literal and ignores the rest, so `"12kg"` is
/// `12`. Text with no leading literal, or one that overflows, becomes `0`,
/// which validation then reports as a missing value.
pub fn parse_field_text(text: &str) -> f64 {
    LEADING_NUMBER_REGEX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Snapshot of the form: inputs plus everything derived from them.
///
/// Every operation returns a new snapshot; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub inputs: DragInputs,
    pub errors: ErrorSet,
    pub result: DragResult,
}

impl FormState {
    /// Zeroed inputs, no messages, invalid result.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Inputs set to the worked example with the result computed.
    pub fn with_example() -> Self {
        let inputs = DragInputs::EXAMPLE;
        Self {
            inputs,
            errors: ErrorSet::default(),
            result: calculate(&inputs),
        }
    }

    /// Apply an edit of `field` to `value`.
    ///
    /// Only the edited field is re-validated, except that a change to the
    /// number of settings also re-checks the current desired setting.
    pub fn edit(&self, field: Field, value: f64) -> Self {
        let inputs = self.inputs.with(field, value);
        let mut errors = self.errors.clone();

        match field {
            Field::MaxDrag | Field::NumSettings => {
                errors.set(field, validate_field(value, field.label(), field.minimum()));
            }
            Field::DesiredSetting => {
                errors.set(field, validate_desired_setting(value, inputs.num_settings));
            }
        }
        if field == Field::NumSettings {
            errors.set(
                Field::DesiredSetting,
                validate_desired_setting(inputs.desired_setting, value),
            );
        }

        let result = calculate(&inputs);
        debug!(
            "{} set to {}: valid={} result={}",
            field.label(),
            value,
            result.is_valid,
            result.final_result
        );

        Self {
            inputs,
            errors,
            result,
        }
    }

    /// Apply an edit from raw input text.
    pub fn edit_text(&self, field: Field, text: &str) -> Self {
        self.edit(field, parse_field_text(text))
    }
}

/// JavaScript entry point for the calculation.
///
/// Returns `{ dragPerSetting, finalResult, isValid }`, or `null` if the
/// result cannot be converted.
#[wasm_bindgen]
pub fn calculate_drag(max_drag: f64, num_settings: f64, desired_setting: f64) -> JsValue {
    let result = calculate(&DragInputs::new(max_drag, num_settings, desired_setting));
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

pub mod theme;

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_calculate_example() {
        let result = calculate(&DragInputs::new(100.0, 10.0, 3.0));
        assert!(result.is_valid);
        assert!(approx_eq(result.drag_per_setting, 10.0));
        assert!(approx_eq(result.final_result, 30.0));
    }

    #[test]
    fn test_calculate_matches_formula() {
        let cases = [(26.4, 12.0, 5.0), (7.5, 3.0, 3.0), (0.01, 1.0, 1.0), (1234.5, 20.0, 17.0)];
        for (max_drag, num_settings, desired) in cases {
            let result = calculate(&DragInputs::new(max_drag, num_settings, desired));
            assert!(result.is_valid);
            assert!(approx_eq(result.drag_per_setting, max_drag / num_settings));
            assert!(approx_eq(result.final_result, max_drag / num_settings * desired));
        }
    }

    #[test]
    fn test_calculate_invalid_inputs() {
        let cases = [
            (0.0, 10.0, 3.0),
            (100.0, 0.0, 3.0),
            (100.0, 10.0, 0.0),
            (-5.0, 10.0, 3.0),
            (50.0, 5.0, 7.0),
        ];
        for (max_drag, num_settings, desired) in cases {
            assert_eq!(
                calculate(&DragInputs::new(max_drag, num_settings, desired)),
                DragResult::INVALID
            );
        }
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let inputs = DragInputs::new(33.3, 7.0, 4.0);
        assert_eq!(calculate(&inputs), calculate(&inputs));
    }

    #[test]
    fn test_desired_setting_equal_to_count_is_valid() {
        let result = calculate(&DragInputs::new(20.0, 4.0, 4.0));
        assert!(result.is_valid);
        assert!(approx_eq(result.final_result, 20.0));
    }

    #[test]
    fn test_validate_field() {
        assert_eq!(validate_field(5.0, "Maximum Drag", 0.01), None);
        assert_eq!(validate_field(0.01, "Maximum Drag", 0.01), None);
        assert_eq!(
            validate_field(0.0, "Maximum Drag", 0.01).unwrap().to_string(),
            "Maximum Drag is required"
        );
        assert_eq!(
            validate_field(0.005, "Maximum Drag", 0.01).unwrap().to_string(),
            "Maximum Drag must be a positive number greater than 0.01"
        );
        assert_eq!(
            validate_field(0.5, "Number of Settings", 1.0).unwrap().to_string(),
            "Number of Settings must be a positive number greater than 1"
        );
        assert_eq!(
            validate_field(-3.0, "Desired Setting", 1.0).unwrap().to_string(),
            "Desired Setting must be a positive number greater than 1"
        );
    }

    #[test]
    fn test_validate_cross_field() {
        assert_eq!(validate_cross_field(3.0, 10.0), None);
        assert_eq!(validate_cross_field(10.0, 10.0), None);
        assert_eq!(validate_cross_field(7.0, 0.0), None);
        assert_eq!(
            validate_cross_field(7.0, 5.0).unwrap().to_string(),
            "Desired setting cannot be greater than number of settings"
        );
    }

    #[test]
    fn test_parse_field_text() {
        assert_eq!(parse_field_text("42"), 42.0);
        assert_eq!(parse_field_text("  26.4"), 26.4);
        assert_eq!(parse_field_text("12kg"), 12.0);
        assert_eq!(parse_field_text(".5"), 0.5);
        assert_eq!(parse_field_text("-3"), -3.0);
        assert_eq!(parse_field_text("1e2"), 100.0);
        assert_eq!(parse_field_text(""), 0.0);
        assert_eq!(parse_field_text("abc"), 0.0);
        assert_eq!(parse_field_text("1e999"), 0.0);
    }

    #[test]
    fn test_non_numeric_text_reports_required() {
        let state = FormState::cleared().edit_text(Field::MaxDrag, "heavy");
        assert_eq!(state.inputs.max_drag, 0.0);
        assert_eq!(state.errors.message(Field::MaxDrag), "Maximum Drag is required");
    }

    #[test]
    fn test_scenario_valid_inputs() {
        let state = FormState::cleared()
            .edit(Field::MaxDrag, 100.0)
            .edit(Field::NumSettings, 10.0)
            .edit(Field::DesiredSetting, 3.0);
        assert!(state.errors.is_clear());
        assert!(state.result.is_valid);
        assert!(approx_eq(state.result.drag_per_setting, 10.0));
        assert!(approx_eq(state.result.final_result, 30.0));
    }

    #[test]
    fn test_scenario_missing_max_drag() {
        let state = FormState::with_example().edit(Field::MaxDrag, 0.0);
        assert!(!state.result.is_valid);
        assert_eq!(state.errors.message(Field::MaxDrag), "Maximum Drag is required");
        assert_eq!(state.errors.message(Field::DesiredSetting), "");
    }

    #[test]
    fn test_scenario_desired_exceeds_settings() {
        let state = FormState::cleared()
            .edit(Field::MaxDrag, 50.0)
            .edit(Field::NumSettings, 5.0)
            .edit(Field::DesiredSetting, 7.0);
        assert_eq!(state.result, DragResult::INVALID);
        assert_eq!(
            state.errors.message(Field::DesiredSetting),
            "Desired setting cannot be greater than number of settings"
        );
    }

    #[test]
    fn test_lowering_settings_flags_desired_setting() {
        let state = FormState::with_example().edit(Field::NumSettings, 2.0);
        assert_eq!(state.errors.get(Field::DesiredSetting), Some(&FieldError::ExceedsSettings));
        assert_eq!(state.errors.get(Field::NumSettings), None);
        assert!(!state.result.is_valid);

        let restored = state.edit(Field::NumSettings, 10.0);
        assert!(restored.errors.is_clear());
        assert!(restored.result.is_valid);
    }

    #[test]
    fn test_settings_edit_rechecks_untouched_desired_setting() {
        let state = FormState::cleared().edit(Field::NumSettings, 10.0);
        assert_eq!(
            state.errors.message(Field::DesiredSetting),
            "Desired Setting is required"
        );
    }

    #[test]
    fn test_field_error_takes_priority_over_cross_field() {
        let state = FormState::cleared()
            .edit(Field::NumSettings, 5.0)
            .edit(Field::DesiredSetting, 0.5);
        assert_eq!(
            state.errors.message(Field::DesiredSetting),
            "Desired Setting must be a positive number greater than 1"
        );
    }

    #[test]
    fn test_untouched_errors_are_carried_over() {
        let state = FormState::cleared()
            .edit(Field::MaxDrag, 0.0)
            .edit(Field::DesiredSetting, 2.0);
        assert_eq!(state.errors.message(Field::MaxDrag), "Maximum Drag is required");
        assert_eq!(state.errors.message(Field::DesiredSetting), "");
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = FormState::with_example().edit(Field::NumSettings, 1.0);
        let cleared = FormState::cleared();
        assert_ne!(state, cleared);
        assert_eq!(cleared.inputs, DragInputs::new(0.0, 0.0, 0.0));
        assert_eq!(cleared.result, DragResult::INVALID);
        assert!(cleared.errors.is_clear());
    }

    #[test]
    fn test_load_example() {
        let state = FormState::cleared()
            .edit(Field::MaxDrag, -1.0)
            .edit(Field::NumSettings, 0.0);
        let example = FormState::with_example();
        assert_ne!(state, example);
        assert_eq!(example.inputs, DragInputs::EXAMPLE);
        assert!(example.errors.is_clear());
        assert_eq!(format!("{:.4}", example.result.final_result), "30.0000");
    }

    #[test]
    fn test_result_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(calculate(&DragInputs::EXAMPLE)).unwrap();
        assert_eq!(json["dragPerSetting"], 10.0);
        assert_eq!(json["finalResult"], 30.0);
        assert_eq!(json["isValid"], true);
    }
}
