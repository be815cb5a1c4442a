//! Display types shared between the UI crate and the web app

use serde::{Deserialize, Serialize};

/// Title given to projects loaded from a local HTML file
pub const IMPORTED_PROJECT_TITLE: &str = "Imported Project";

/// Owner and space id used for projects that never touched the backend
pub const LOCAL_OWNER: &str = "local";

/// A project handed to the application after a successful import
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportedProject {
    pub html: String,
    #[serde(default)]
    pub prompts: Vec<String>,
    pub title: String,
    #[serde(default = "local_owner")]
    pub user_id: String,
    #[serde(default = "local_owner")]
    pub space_id: String,
}

fn local_owner() -> String {
    LOCAL_OWNER.to_string()
}

impl ImportedProject {
    /// Build the record for HTML read from the user's computer
    pub fn from_local_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            prompts: Vec::new(),
            title: IMPORTED_PROJECT_TITLE.to_string(),
            user_id: LOCAL_OWNER.to_string(),
            space_id: LOCAL_OWNER.to_string(),
        }
    }

    pub fn is_local(&self) -> bool {
        self.space_id == LOCAL_OWNER
    }
}
