//! Store types for UI state management
//!
//! These stores hold UI state that the web app drives and the pure views
//! render. Each store derives `Store` for fine-grained reactivity via lensing.

pub mod load_project;
pub mod notifications;

pub use load_project::*;
pub use notifications::*;
