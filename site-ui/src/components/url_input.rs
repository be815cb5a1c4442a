//! Project URL field
//!
//! A plain text input: the value goes to the backend as typed, so there is no
//! browser-side URL validation. Enter submits, same as pressing Import.

use dioxus::prelude::*;

#[component]
pub fn UrlInput(
    value: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    placeholder: &'static str,
    #[props(default)] disabled: bool,
) -> Element {
    let state_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        "focus:outline-none focus:ring-1 focus:ring-blue-200"
    };

    rsx! {
        input {
            r#type: "text",
            inputmode: "url",
            autocomplete: "off",
            spellcheck: "false",
            aria_label: "Project URL",
            class: "w-full px-3 py-2 bg-white border border-neutral-300 rounded-lg text-neutral-800 placeholder-neutral-400 selection:bg-blue-100 {state_class}",
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
            onkeydown: move |e| {
                if e.key() == Key::Enter && !disabled {
                    e.prevent_default();
                    on_submit.call(());
                }
            },
        }
    }
}
