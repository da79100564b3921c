use crate::config::{DISPLAY_DECIMALS, RESULT_PLACEHOLDER};
use drag_calculator::{DragInputs, DragResult, Field};

/// Format a value with the fixed display precision.
pub fn format_fixed(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, value)
}

/// Headline text for a result: the final value, or a placeholder when the
/// inputs cannot be calculated.
pub fn format_result(result: &DragResult) -> String {
    if result.is_valid {
        format_fixed(result.final_result)
    } else {
        RESULT_PLACEHOLDER.to_string()
    }
}

/// Text shown back in an input: empty for zero so the placeholder shows.
pub fn input_echo_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// The two worked steps of a valid calculation.
pub fn calculation_steps(inputs: &DragInputs, result: &DragResult) -> [String; 2] {
    [
        format!(
            "1. Drag per setting = {} ÷ {} = {}",
            inputs.max_drag,
            inputs.num_settings,
            format_fixed(result.drag_per_setting)
        ),
        format!(
            "2. Final result = {} × {} = {}",
            format_fixed(result.drag_per_setting),
            inputs.desired_setting,
            format_fixed(result.final_result)
        ),
    ]
}

/// Placeholder for an input; the desired setting advertises its valid range.
pub fn field_placeholder(field: Field, num_settings: f64) -> String {
    match field {
        Field::MaxDrag => "Enter maximum drag value".to_string(),
        Field::NumSettings => "Enter total number of settings".to_string(),
        Field::DesiredSetting if num_settings > 0.0 => {
            format!("Enter setting (1-{})", num_settings)
        }
        Field::DesiredSetting => "Enter desired setting number".to_string(),
    }
}

/// Helper line under an input.
pub fn field_hint(field: Field, num_settings: f64) -> String {
    match field {
        Field::MaxDrag => "The maximum drag value of your reel".to_string(),
        Field::NumSettings => "Total number of available settings".to_string(),
        Field::DesiredSetting if num_settings > 0.0 => format!(
            "The specific setting you want to calculate for (1-{})",
            num_settings
        ),
        Field::DesiredSetting => "The specific setting you want to calculate for".to_string(),
    }
}
