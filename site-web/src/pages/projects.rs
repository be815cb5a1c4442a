use crate::load_project::LoadProject;
use crate::{ImportedProjects, Route};
use dioxus::prelude::*;
use site_ui::display_types::ImportedProject;
use tracing::info;

#[component]
pub fn Projects() -> Element {
    let mut projects: ImportedProjects = use_context();
    let list = projects.read().clone();

    rsx! {
        div { class: "flex items-center justify-between mb-6",
            h1 { class: "text-3xl font-bold text-neutral-950", "My Projects" }
            LoadProject {
                on_success: move |project: ImportedProject| {
                    info!("Adding {} to my projects", project.title);
                    projects.write().push(project);
                },
            }
        }
        if list.is_empty() {
            p { class: "text-neutral-500",
                "No projects yet. Load an HTML file or a project URL to get started."
            }
        } else {
            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                for (index, project) in list.into_iter().enumerate() {
                    ProjectCard { key: "{index}", index, project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(index: usize, project: ImportedProject) -> Element {
    let owner = if project.is_local() {
        "From your computer".to_string()
    } else {
        project.space_id.clone()
    };

    rsx! {
        Link {
            to: Route::ProjectDetail { index },
            class: "block rounded-2xl border border-neutral-200 bg-white p-4 hover:border-neutral-400",
            iframe {
                class: "w-full h-40 rounded-lg pointer-events-none bg-neutral-100",
                sandbox: "",
                srcdoc: "{project.html}",
            }
            p { class: "mt-3 font-medium text-neutral-900", "{project.title}" }
            p { class: "text-xs text-neutral-500", "{owner}" }
        }
    }
}
