//! Pure Yew view components for the Drag Calculator UI.
//!
//! Components here hold no state; everything comes in through props.

use crate::config::RESULT_UNITS;
use crate::utils::{calculation_steps, format_result};
use drag_calculator::theme::Theme;
use drag_calculator::{DragInputs, DragResult, FieldError};
use yew::prelude::*;

/// Renders the headline value and, for a valid result, the worked steps.
pub fn render_result(inputs: &DragInputs, result: &DragResult) -> Html {
    html! {
        <>
            <div class="result-value-box">
                <div class="result-caption">{ "Drag at Desired Setting" }</div>
                <div class="result-value" data-testid="text-result">{ format_result(result) }</div>
                <div class="result-units">{ RESULT_UNITS }</div>
            </div>
            if result.is_valid {
                <div class="calculation-steps" data-testid="calculation-steps">
                    <div class="steps-title">{ "Calculation Steps:" }</div>
                    { calculation_steps(inputs, result).into_iter().map(|step| {
                        html! { <div>{ step }</div> }
                    }).collect::<Html>() }
                </div>
            }
        </>
    }
}

/// A labelled numeric input with helper text and an inline error.
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub hint: AttrValue,
    pub min: AttrValue,
    pub step: AttrValue,
    #[prop_or_default]
    pub max: Option<AttrValue>,
    pub value: AttrValue,
    pub error: Option<FieldError>,
    pub test_id: AttrValue,
    pub oninput: Callback<InputEvent>,
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>
                { props.label.to_string() }
                <span class="required-mark">{ " *" }</span>
            </label>
            <input
                type="number"
                id={props.id.clone()}
                data-testid={format!("input-{}", props.test_id)}
                placeholder={props.placeholder.clone()}
                min={props.min.clone()}
                max={props.max.clone()}
                step={props.step.clone()}
                value={props.value.clone()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                oninput={props.oninput.clone()}
            />
            <p class="input-hint">{ props.hint.to_string() }</p>
            if let Some(ref err) = props.error {
                <div class="input-error" data-testid={format!("error-{}", props.test_id)}>
                    { err.to_string() }
                </div>
            }
        </div>
    }
}

/// Stand-alone result card.
#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub inputs: DragInputs,
    pub result: DragResult,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    html! {
        <div class="card result-card">
            <h3>{ "Result" }</h3>
            { render_result(&props.inputs, &props.result) }
        </div>
    }
}

#[function_component(FormulaCard)]
pub fn formula_card() -> Html {
    html! {
        <div class="card formula-card">
            <h3>{ "Formula" }</h3>
            <code class="formula-code" data-testid="formula-code">
                { "drag_per_setting = max_drag / num_settings" }<br />
                { "drag_at_desired_setting = drag_per_setting * desired_setting" }<br />
                <span class="formula-return">{ "return drag_at_desired_setting" }</span>
            </code>
            <p><strong>{ "How it works:" }</strong></p>
            <ul>
                <li>{ "Divides total drag evenly across all settings" }</li>
                <li>{ "Multiplies by your desired setting number" }</li>
                <li>{ "Provides precise drag value for that setting" }</li>
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExampleCardProps {
    pub on_load: Callback<()>,
}

/// Worked example with a button that loads it into the form.
#[function_component(ExampleCard)]
pub fn example_card(props: &ExampleCardProps) -> Html {
    let example = DragInputs::EXAMPLE;
    let drag_per_setting = example.max_drag / example.num_settings;
    let final_result = drag_per_setting * example.desired_setting;

    html! {
        <div class="card example-card">
            <h3>{ "Example" }</h3>
            <div><strong>{ "Input:" }</strong></div>
            <ul data-testid="example-inputs">
                <li>{ format!("Max Drag: {}", example.max_drag) }</li>
                <li>{ format!("Number of Settings: {}", example.num_settings) }</li>
                <li>{ format!("Desired Setting: {}", example.desired_setting) }</li>
            </ul>
            <div><strong>{ "Calculation:" }</strong></div>
            <div class="example-calculation" data-testid="example-calculation">
                <div>{ format!("drag_per_setting = {} ÷ {} = {}",
                               example.max_drag, example.num_settings, drag_per_setting) }</div>
                <div>
                    { format!("drag_at_setting_{} = {} × {} = ",
                              example.desired_setting, drag_per_setting, example.desired_setting) }
                    <span class="example-answer">{ final_result.to_string() }</span>
                </div>
            </div>
            <button
                type="button"
                class="btn-example"
                data-testid="button-load-example"
                onclick={props.on_load.reform(|_| ())}
            >
                { "Load Example Values" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let target = props.theme.toggled();
    let icon = match props.theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    html! {
        <button
            type="button"
            class="theme-toggle"
            data-testid="theme-toggle"
            aria-label={format!("Switch to {} theme", target)}
            onclick={props.on_toggle.reform(|_| ())}
        >
            { icon }
        </button>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="page-footer">
            { "Results are in the same units as the reel's maximum drag." }
        </footer>
    }
}
