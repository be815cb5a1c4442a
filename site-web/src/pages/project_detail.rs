use crate::{ImportedProjects, Route};
use dioxus::prelude::*;

#[component]
pub fn ProjectDetail(index: usize) -> Element {
    let projects: ImportedProjects = use_context();
    let project = projects.read().get(index).cloned();

    let Some(project) = project else {
        return rsx! {
            div { class: "py-24 text-center text-neutral-500",
                p { "This project is not loaded in this session." }
                Link { to: Route::Projects {}, class: "text-neutral-900 underline", "Back to my projects" }
            }
        };
    };

    let prompt_count = project.prompts.len();

    rsx! {
        div { class: "flex items-center justify-between mb-4",
            div {
                h1 { class: "text-2xl font-semibold text-neutral-950", "{project.title}" }
                p { class: "text-sm text-neutral-500",
                    "{project.user_id} / {project.space_id} · {prompt_count} prompts"
                }
            }
            Link { to: Route::Projects {}, class: "text-sm text-neutral-600 hover:text-neutral-900",
                "Back"
            }
        }
        iframe {
            class: "w-full h-[70vh] rounded-2xl border border-neutral-200 bg-white",
            sandbox: "allow-scripts",
            srcdoc: "{project.html}",
        }
    }
}
