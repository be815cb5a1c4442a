pub mod api;
pub mod config;
pub mod load_project;
pub mod pages;

use config::Config;
use dioxus::prelude::*;
use pages::{AppLayout, PageNotFound, ProjectDetail, Projects};
use site_ui::display_types::ImportedProject;
use site_ui::stores::NotificationState;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Projects {},
    #[route("/projects/:index")]
    ProjectDetail { index: usize },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Projects imported during this session, newest last
pub type ImportedProjects = Signal<Vec<ImportedProject>>;

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Config::load()));
    let notifications = use_store(NotificationState::default);
    use_context_provider(|| notifications);
    use_context_provider(|| ImportedProjects::new(Vec::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-neutral-50", Router::<Route> {} }
    }
}
