use drag_calculator::theme::{initial_theme, persist_theme, Theme, ThemeStore};
use drag_calculator::{Field, FormState};
use log::{info, warn};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Current form snapshot and the actions that replace it.
#[derive(Clone)]
pub struct DragForm {
    pub state: FormState,
    /// Raw text typed into one of the inputs.
    pub on_field_input: Callback<(Field, String)>,
    pub on_clear: Callback<()>,
    pub on_load_example: Callback<()>,
}

impl DragForm {
    /// `oninput` handler for the input bound to `field`.
    pub fn input_handler(&self, field: Field) -> Callback<InputEvent> {
        self.on_field_input.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input.value())
        })
    }
}

/// Owns the form state. Every action swaps in a whole new snapshot.
#[hook]
pub fn use_drag_form() -> DragForm {
    let state_handle: UseStateHandle<FormState> = use_state(FormState::cleared);

    let on_field_input = {
        let state = state_handle.clone();
        Callback::from(move |(field, text): (Field, String)| {
            state.set(state.edit_text(field, &text));
        })
    };

    let on_clear = {
        let state = state_handle.clone();
        Callback::from(move |_: ()| {
            info!("Form cleared");
            state.set(FormState::cleared());
        })
    };

    let on_load_example = {
        let state = state_handle.clone();
        Callback::from(move |_: ()| {
            info!("Loaded example inputs");
            state.set(FormState::with_example());
        })
    };

    DragForm {
        state: (*state_handle).clone(),
        on_field_input,
        on_clear,
        on_load_example,
    }
}

/// Active theme plus a toggle.
#[derive(Clone)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Swap the `light`/`dark` class on the document root.
fn apply_theme_class(theme: Theme) {
    let Some(root) = gloo_utils::document().document_element() else {
        warn!("No document element to apply theme to");
        return;
    };
    let classes = root.class_list();
    let applied = classes
        .remove_2(Theme::Light.as_str(), Theme::Dark.as_str())
        .and_then(|_| classes.add_1(theme.as_str()));
    if let Err(e) = applied {
        warn!("Failed to apply theme class: {:?}", e);
    }
}

/// Loads the theme from `store` once, then applies and persists every change.
#[hook]
pub fn use_theme(store: Rc<dyn ThemeStore>, default: Theme) -> ThemeHandle {
    let initial_store = store.clone();
    let theme_handle = use_state(move || initial_theme(initial_store.as_ref(), default));

    {
        let store = store.clone();
        use_effect_with(*theme_handle, move |theme| {
            apply_theme_class(*theme);
            if let Err(e) = persist_theme(store.as_ref(), *theme) {
                warn!("{}", e);
            }
            || ()
        });
    }

    let on_toggle = {
        let theme = theme_handle.clone();
        Callback::from(move |_: ()| theme.set(theme.toggled()))
    };

    ThemeHandle {
        theme: *theme_handle,
        on_toggle,
    }
}
