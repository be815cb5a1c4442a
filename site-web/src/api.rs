//! Client for the project import backend
//!
//! `POST {endpoint}` with `{"url": ...}`. A 2xx response carries the project.
//! Anything else may carry `{"error": ..., "redirect": ...}`; a redirect means
//! the app should navigate there instead of reporting a failure.

use serde::{Deserialize, Serialize};
use site_ui::display_types::ImportedProject;
use site_ui::stores::ImportOutcome;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Serialize)]
struct ImportRequest<'a> {
    url: &'a str,
}

/// Error body returned by the backend on a non-2xx response
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ImportErrorBody {
    pub error: Option<String>,
    pub redirect: Option<String>,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("import rejected with status {status}")]
    Rejected { status: u16, body: ImportErrorBody },
}

/// Parse an error body, tolerating empty or non-JSON responses
pub fn parse_error_body(text: &str) -> ImportErrorBody {
    serde_json::from_str(text).unwrap_or_default()
}

impl From<ImportError> for ImportOutcome {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Request(_) => ImportOutcome::ImportFailed(None),
            ImportError::Rejected { body, .. } => {
                let redirect = body.redirect.filter(|r| !r.trim().is_empty());
                match redirect {
                    Some(path) => ImportOutcome::RedirectRequested(path),
                    None => ImportOutcome::ImportFailed(body.error),
                }
            }
        }
    }
}

/// Ask the backend to import the project at `url`
pub async fn import_project(endpoint: &str, url: &str) -> Result<ImportedProject, ImportError> {
    let resp = reqwest::Client::new()
        .post(endpoint)
        .json(&ImportRequest { url })
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(ImportError::Rejected {
            status: status.as_u16(),
            body: parse_error_body(&text),
        });
    }

    Ok(resp.json::<ImportedProject>().await?)
}

/// Run an import and fold the result into the dialog's outcome type
pub async fn import_outcome(endpoint: &str, url: &str) -> ImportOutcome {
    match import_project(endpoint, url).await {
        Ok(project) => {
            info!("Backend imported {} as {}", url, project.space_id);
            ImportOutcome::Success(project)
        }
        Err(e) => {
            warn!("Import of {} failed: {}", url, e);
            e.into()
        }
    }
}
