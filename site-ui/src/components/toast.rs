//! Toast notifications
//!
//! Renders the `NotificationState` queue in the bottom-right corner. Each
//! toast dismisses itself after `duration_ms`, or earlier via its X button.

use crate::components::icons::{AlertTriangleIcon, CheckIcon, XIcon};
use crate::components::ChromelessButton;
use crate::stores::notifications::{
    NotificationKind, NotificationState, NotificationStateStoreExt, Toast,
    DEFAULT_TOAST_DURATION_MS,
};
use dioxus::prelude::*;

/// Stack of all visible toasts, oldest on top
#[component]
pub fn ToastStack(
    state: ReadStore<NotificationState>,
    on_dismiss: EventHandler<u64>,
    #[props(default = DEFAULT_TOAST_DURATION_MS)] duration_ms: u64,
) -> Element {
    let toasts = state.toasts().read().clone();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-md",
            aria_live: "polite",
            for toast in toasts {
                ToastView {
                    key: "{toast.id}",
                    toast,
                    duration_ms,
                    on_dismiss,
                }
            }
        }
    }
}

/// A single dismissible toast
#[component]
pub fn ToastView(toast: Toast, duration_ms: u64, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;

    use_hook(move || {
        spawn(async move {
            sleep_ms(duration_ms).await;
            on_dismiss.call(id);
        });
    });

    let (color, role) = match toast.notification.kind {
        NotificationKind::Success => ("bg-white text-neutral-900 border-neutral-200", "status"),
        NotificationKind::Error => ("bg-red-50 text-red-700 border-red-200", "alert"),
    };

    rsx! {
        div {
            class: "flex items-center gap-3 px-4 py-3 rounded-xl border shadow-lg text-sm {color}",
            role,
            if toast.notification.kind == NotificationKind::Success {
                CheckIcon { class: "w-4 h-4 text-green-600 shrink-0" }
            } else {
                AlertTriangleIcon { class: "w-4 h-4 shrink-0" }
            }
            span { class: "flex-1", "{toast.notification.message}" }
            ChromelessButton {
                class: Some("opacity-60 hover:opacity-100".to_string()),
                aria_label: Some("Dismiss".to_string()),
                onclick: move |_| on_dismiss.call(id),
                XIcon { class: "w-3.5 h-3.5" }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
