//! Main module for the Drag Calculator application using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use drag_calculator::theme::{LocalStorageThemeStore, Theme, ThemeStore};
use drag_calculator::Field;
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{
    render_result, ExampleCard, Footer, FormulaCard, NumberField, ResultCard, ThemeToggle,
};
use config::*;
use hooks::{use_drag_form, use_theme, DragForm};
use utils::{field_hint, field_placeholder, input_echo_text};

// ──────────────────────────────────────────────────────────────────────────────
// Field wiring

fn field_id(field: Field) -> &'static str {
    match field {
        Field::MaxDrag => "maxDrag",
        Field::NumSettings => "numSettings",
        Field::DesiredSetting => "desiredSetting",
    }
}

fn field_test_id(field: Field) -> &'static str {
    match field {
        Field::MaxDrag => "max-drag",
        Field::NumSettings => "num-settings",
        Field::DesiredSetting => "desired-setting",
    }
}

fn field_step(field: Field) -> &'static str {
    match field {
        Field::MaxDrag => MAX_DRAG_STEP,
        Field::NumSettings | Field::DesiredSetting => COUNT_STEP,
    }
}

fn render_field(form: &DragForm, field: Field) -> Html {
    let inputs = &form.state.inputs;
    // The desired setting is capped once a setting count exists.
    let max = (field == Field::DesiredSetting && inputs.num_settings > 0.0)
        .then(|| AttrValue::from(inputs.num_settings.to_string()));

    html! {
        <NumberField
            id={field_id(field)}
            label={field.label()}
            placeholder={field_placeholder(field, inputs.num_settings)}
            hint={field_hint(field, inputs.num_settings)}
            min={field.minimum().to_string()}
            step={field_step(field)}
            max={max}
            value={input_echo_text(inputs.get(field))}
            error={form.state.errors.get(field).cloned()}
            test_id={field_test_id(field)}
            oninput={form.input_handler(field)}
        />
    }
}

/// Input card: the three fields, the live result and the clear button.
fn render_form(form: &DragForm) -> Html {
    html! {
        <div class="card calculator-card">
            <h2>{ "Input Parameters" }</h2>
            { Field::ALL.iter().map(|&field| render_field(form, field)).collect::<Html>() }
            <div class="live-result">
                { render_result(&form.state.inputs, &form.state.result) }
            </div>
            <div class="form-actions">
                <button
                    type="button"
                    class="btn-secondary"
                    data-testid="button-clear"
                    onclick={form.on_clear.reform(|_| ())}
                >
                    { "Clear" }
                </button>
            </div>
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    let form = use_drag_form();

    let store = use_memo((), |_| LocalStorageThemeStore::new(THEME_STORAGE_KEY));
    let store: Rc<dyn ThemeStore> = store;
    let theme = use_theme(store, Theme::Light);

    use_effect_with((), |_| {
        gloo_utils::document().set_title(PAGE_TITLE);
    });

    html! {
        <div class="page">
            <div class="theme-bar">
                <ThemeToggle theme={theme.theme} on_toggle={theme.on_toggle.clone()} />
            </div>
            <header class="page-header">
                <h1>{ APP_HEADING }</h1>
                <p class="subtitle">{ APP_SUBTITLE }</p>
            </header>
            <div class="layout">
                <div class="main-column">
                    { render_form(&form) }
                </div>
                <div class="side-column">
                    <ResultCard inputs={form.state.inputs} result={form.state.result} />
                    <FormulaCard />
                    <ExampleCard on_load={form.on_load_example.clone()} />
                </div>
            </div>
            <Footer />
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
