//! Trigger buttons that open the load-project dialog

use crate::components::icons::ImportIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

pub const FULL_TRIGGER_LABEL: &str = "Load existing Project";

/// Label of the narrow-layout button
pub fn compact_trigger_label(full_xs_btn: bool) -> &'static str {
    if full_xs_btn {
        FULL_TRIGGER_LABEL
    } else {
        "Load"
    }
}

/// Two buttons, one per layout width: the full one is hidden below `lg`,
/// the compact one above it. `full_xs_btn` gives the compact button the
/// icon and full label.
#[component]
pub fn LoadProjectTrigger(
    #[props(default)] full_xs_btn: bool,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "inline-flex",
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Medium,
                class: Some("max-lg:hidden".to_string()),
                onclick: move |_| on_click.call(()),
                ImportIcon { class: "w-4 h-4" }
                "{FULL_TRIGGER_LABEL}"
            }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                class: Some("lg:hidden".to_string()),
                onclick: move |_| on_click.call(()),
                if full_xs_btn {
                    ImportIcon { class: "w-3.5 h-3.5" }
                }
                "{compact_trigger_label(full_xs_btn)}"
            }
        }
    }
}
