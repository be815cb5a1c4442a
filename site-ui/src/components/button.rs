//! Buttons used by the load-project dialog and toasts

use dioxus::prelude::*;

/// Unstyled button. Suppresses clicks while disabled or loading and exposes
/// both states to assistive tech.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let inert = disabled || loading;

    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            disabled: inert,
            aria_label: aria_label.as_deref(),
            aria_busy: loading.then_some("true"),
            onclick: move |e| {
                if !inert {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Near-black fill, for the dialog's Import action
    Primary,
    /// White with a border, for the trigger buttons
    Outline,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Compact trigger in narrow layouts
    Small,
    Medium,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-neutral-950 hover:bg-neutral-800 text-white",
            ButtonVariant::Outline => {
                "bg-white border border-neutral-300 hover:bg-neutral-50 text-neutral-800"
            }
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "gap-1 px-3 py-1.5 text-sm",
            ButtonSize::Medium => "gap-1.5 px-4 py-2",
        }
    }
}

/// Rounded pill button
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = format!(
        "inline-flex items-center justify-center rounded-full transition-colors disabled:opacity-50 disabled:cursor-not-allowed {} {} {}",
        size.class(),
        variant.class(),
        class.as_deref().unwrap_or_default(),
    );

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
