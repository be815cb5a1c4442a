//! File picker input
//!
//! Wraps `<input type="file">`. Only the first picked file is reported; the
//! `accept` filter is a hint to the native picker and is not enforced here.
//! The browser fires no `change` when the same file is picked twice, so
//! callers re-key this component when a pick has to be repeatable.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

#[component]
pub fn FileInput(
    /// Called with the first file the user picked
    on_file: EventHandler<FileData>,
    /// Comma separated extensions or MIME types, e.g. ".html"
    #[props(default)]
    accept: Option<&'static str>,
    #[props(default)] disabled: bool,
) -> Element {
    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        "cursor-pointer"
    };

    rsx! {
        input {
            r#type: "file",
            class: "w-full bg-white border border-neutral-300 rounded-lg px-3 py-2 text-sm text-neutral-800 file:mr-3 file:border-0 file:bg-transparent file:font-medium {disabled_class}",
            accept,
            disabled,
            onchange: move |evt| {
                if let Some(file) = evt.files().into_iter().next() {
                    on_file.call(file);
                }
            },
        }
    }
}
