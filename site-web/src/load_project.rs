//! Stateful "Load existing Project" dialog
//!
//! Owns the dialog store and runs the effects its reducer asks for: reading
//! the picked file, calling the import backend, pushing toasts, handing the
//! project to the caller and following backend redirects.

use crate::api;
use crate::config::Config;
use dioxus::html::FileData;
use dioxus::prelude::*;
use site_ui::display_types::ImportedProject;
use site_ui::stores::{
    LoadProjectEffect, LoadProjectEvent, LoadProjectState, NotificationState,
};
use site_ui::LoadProjectView;
use tracing::{info, warn};

/// Completion for a read the reducer requested when no file handle is held,
/// e.g. the picker was cleared between the pick and the Import press.
fn missing_file_read(attempt: u64) -> LoadProjectEvent {
    LoadProjectEvent::FileRead {
        attempt,
        result: Err("no file selected".to_string()),
    }
}

/// Handles shared by the event handlers and the spawned import tasks
#[derive(Clone, Copy)]
struct DialogDriver {
    state: Store<LoadProjectState>,
    picked_file: Signal<Option<FileData>>,
    notifications: Store<NotificationState>,
    config: Signal<Config>,
    on_success: EventHandler<ImportedProject>,
}

impl DialogDriver {
    fn dispatch(self, event: LoadProjectEvent) {
        let mut state = self.state;
        let effects = state.write().apply(event);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: LoadProjectEffect) {
        match effect {
            LoadProjectEffect::ReadFile { attempt } => {
                let Some(file) = self.picked_file.peek().clone() else {
                    self.dispatch(missing_file_read(attempt));
                    return;
                };
                spawn(async move {
                    info!("Reading {}", file.name());
                    let result = file.read_string().await.map_err(|e| e.to_string());
                    self.dispatch(LoadProjectEvent::FileRead { attempt, result });
                });
            }
            LoadProjectEffect::ImportUrl { attempt, url } => {
                let endpoint = self.config.peek().import_endpoint.clone();
                spawn(async move {
                    let outcome = api::import_outcome(&endpoint, &url).await;
                    self.dispatch(LoadProjectEvent::UrlImportFinished { attempt, outcome });
                });
            }
            LoadProjectEffect::Notify(notification) => {
                let mut notifications = self.notifications;
                notifications.write().push(notification);
            }
            LoadProjectEffect::Deliver(project) => self.on_success.call(project),
            LoadProjectEffect::Navigate(path) => {
                if navigator().push(path.clone()).is_some() {
                    warn!("Navigation to {} failed", path);
                }
            }
        }
    }
}

#[component]
pub fn LoadProject(
    #[props(default)] full_xs_btn: bool,
    on_success: EventHandler<ImportedProject>,
) -> Element {
    let config: Signal<Config> = use_context();
    let notifications: Store<NotificationState> = use_context();
    let state = use_store(move || LoadProjectState::new(config.peek().import_mode));
    let mut picked_file: Signal<Option<FileData>> = use_signal(|| None);

    let driver = DialogDriver {
        state,
        picked_file,
        notifications,
        config,
        on_success,
    };

    rsx! {
        LoadProjectView {
            state,
            full_xs_btn,
            on_open_change: move |open: bool| {
                if !open {
                    picked_file.set(None);
                }
                driver.dispatch(LoadProjectEvent::SetOpen(open));
            },
            on_url_change: move |url: String| driver.dispatch(LoadProjectEvent::UrlChanged(url)),
            on_file_selected: move |file: FileData| {
                let name = file.name();
                picked_file.set(Some(file));
                driver.dispatch(LoadProjectEvent::FileSelected { name });
            },
            on_import: move |_| driver.dispatch(LoadProjectEvent::ImportClicked),
        }
    }
}
