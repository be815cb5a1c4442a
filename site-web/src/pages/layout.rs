use crate::config::Config;
use crate::Route;
use dioxus::prelude::*;
use site_ui::stores::NotificationState;
use site_ui::ToastStack;

#[component]
pub fn AppLayout() -> Element {
    let config: Signal<Config> = use_context();
    let mut notifications: Store<NotificationState> = use_context();
    let duration_ms = config.read().toast_duration_ms;

    rsx! {
        header { class: "flex items-center justify-between px-6 py-4 border-b border-neutral-200 bg-white",
            Link { to: Route::Projects {}, class: "text-lg font-semibold text-neutral-950",
                "My Projects"
            }
        }
        main { class: "container mx-auto px-6 py-8", Outlet::<Route> {} }
        ToastStack {
            state: notifications,
            duration_ms,
            on_dismiss: move |id: u64| {
                notifications.write().dismiss(id);
            },
        }
    }
}
