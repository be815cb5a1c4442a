//! Load project dialog view - pure rendering, no file reading or network
//!
//! Accepts `ReadStore<LoadProjectState>` and reports user intent through
//! callbacks. The web app feeds those into `LoadProjectState::apply`.

use crate::components::icons::LoaderIcon;
use crate::components::load_project::LoadProjectTrigger;
use crate::components::{Button, ButtonSize, ButtonVariant, FileInput, Modal, UrlInput};
use crate::stores::load_project::{ImportMode, LoadProjectState, LoadProjectStateStoreExt};
use dioxus::html::FileData;
use dioxus::prelude::*;

#[component]
pub fn LoadProjectView(
    state: ReadStore<LoadProjectState>,
    #[props(default)] full_xs_btn: bool,
    /// Called with `true` from the trigger and `false` on any dismissal
    on_open_change: EventHandler<bool>,
    on_url_change: EventHandler<String>,
    on_file_selected: EventHandler<FileData>,
    on_import: EventHandler<()>,
) -> Element {
    let is_open_memo = use_memo(move || *state.is_open().read());
    let is_open: ReadSignal<bool> = is_open_memo.into();

    let snapshot = state.read().clone();
    let is_loading = snapshot.is_loading();
    let file_imported = snapshot.file_imported();
    let staged_name = match snapshot.mode {
        ImportMode::Staged => snapshot.file.name().map(str::to_string),
        ImportMode::Immediate => None,
    };

    rsx! {
        LoadProjectTrigger { full_xs_btn, on_click: move |_| on_open_change.call(true) }
        Modal {
            is_open,
            on_close: move |_| on_open_change.call(false),
            class: Some("sm:max-w-md".to_string()),
            div { class: "rounded-3xl bg-white border border-neutral-100 overflow-hidden text-center",
                header { class: "bg-neutral-50 p-6 border-b border-neutral-200/60",
                    p { class: "text-2xl font-semibold text-neutral-950", "Import a Project" }
                    p { class: "text-base text-neutral-500 mt-1.5",
                        "Enter the URL of your project to import it."
                    }
                }
                main { class: "space-y-4 px-9 pb-9 pt-2",
                    div {
                        p { class: "text-sm text-neutral-700 mb-2", "Load HTML from your computer" }
                        FileInput {
                            key: "{snapshot.file_input_generation()}",
                            accept: ".html",
                            disabled: snapshot.file_input_disabled(),
                            on_file: move |file: FileData| on_file_selected.call(file),
                        }
                        if let Some(name) = staged_name {
                            div { class: "text-neutral-500 text-xs mt-1", "Selected: {name}" }
                        }
                        if file_imported {
                            div { class: "text-green-600 text-xs mt-1",
                                "File imported! You can close this dialog."
                            }
                        }
                    }
                    div { class: "text-sm text-neutral-700 mb-2", "OR" }
                    div {
                        p { class: "text-sm text-neutral-700 mb-2", "Enter your Project URL" }
                        UrlInput {
                            value: snapshot.url.clone(),
                            on_input: move |value: String| on_url_change.call(value),
                            on_submit: move |_| on_import.call(()),
                            placeholder: "https://example.com/my-project",
                            disabled: snapshot.url_input_disabled(),
                        }
                    }
                    div {
                        p { class: "text-sm text-neutral-700 mb-2", "Then, let's import it!" }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Medium,
                            class: Some("relative w-full".to_string()),
                            disabled: snapshot.import_button_disabled(),
                            loading: is_loading,
                            onclick: move |_| on_import.call(()),
                            if is_loading {
                                LoaderIcon { class: "size-4 animate-spin" }
                                "Importing..."
                            } else {
                                "Import Project"
                            }
                        }
                        if file_imported {
                            div { class: "text-xs text-neutral-500 mt-1",
                                "URL import disabled after file import."
                            }
                        }
                    }
                }
            }
        }
    }
}
