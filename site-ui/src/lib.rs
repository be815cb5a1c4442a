//! site-ui - Shared UI types and components for the site builder
//!
//! Contains display types, stores, and pure view components. The web app
//! owns data fetching and routing; everything here renders from props.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
