//! "Load existing Project" dialog views

mod trigger;
mod view;

pub use trigger::{compact_trigger_label, LoadProjectTrigger, FULL_TRIGGER_LABEL};
pub use view::LoadProjectView;
