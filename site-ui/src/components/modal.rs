//! Modal component using native HTML `<dialog>` element
//!
//! Uses `showModal()` for top-layer rendering, focus trapping, Escape to
//! close and `::backdrop` styling. The element handles its own visibility,
//! so layout classes go on the inner container, never on `<dialog>` itself.
//!
//! `oncancel` only fires for user actions (Escape), not for programmatic
//! `close()` calls. `showModal()` throws if the dialog is already open, so
//! the `open` attribute is checked first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

/// Counter for generating unique modal IDs
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method on a DOM element by name
fn call_dialog_method(element: &web_sys_x::Element, method: &str) {
    if let Ok(value) = js_sys_x::Reflect::get(element, &method.into()) {
        if let Some(func) = value.dyn_ref::<js_sys_x::Function>() {
            if let Err(e) = func.call0(element) {
                tracing::warn!("dialog.{}() failed: {:?}", method, e);
            }
        }
    }
}

/// Modal component that wraps content in a native `<dialog>` element
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    /// Called when the modal should close (Escape key or backdrop click)
    on_close: EventHandler<()>,
    /// Modal content
    children: Element,
    /// Optional CSS class for the content panel
    #[props(default)]
    class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&dialog_id_for_effect) else {
            return;
        };

        // Effect may run more than once for the same value
        let is_dialog_open = element.has_attribute("open");
        if is_open && !is_dialog_open {
            call_dialog_method(&element, "showModal");
        } else if !is_open && is_dialog_open {
            call_dialog_method(&element, "close");
        }
    });

    let panel_class = class.unwrap_or_default();

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/60",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "w-full {panel_class}",
                        onclick: move |evt| evt.stop_propagation(),
                        {children}
                    }
                }
            }
        }
    }
}
