use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "flex flex-col items-center justify-center gap-4 py-24 text-neutral-500",
            p { "Nothing lives at /{path}" }
            Link { to: Route::Projects {}, class: "text-neutral-900 underline", "Back to my projects" }
        }
    }
}
