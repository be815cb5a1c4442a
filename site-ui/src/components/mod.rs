//! Shared UI components

pub mod button;
pub mod file_input;
pub mod icons;
pub mod load_project;
pub mod modal;
pub mod toast;
pub mod url_input;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use file_input::FileInput;
pub use icons::{AlertTriangleIcon, CheckIcon, ImportIcon, LoaderIcon, XIcon};
pub use load_project::{compact_trigger_label, LoadProjectTrigger, LoadProjectView};
pub use modal::Modal;
pub use toast::{ToastStack, ToastView};
pub use url_input::UrlInput;
