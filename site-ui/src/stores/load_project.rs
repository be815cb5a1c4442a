//! Load-project dialog state store
//!
//! State machine for the "Load existing Project" dialog. The reducer is pure:
//! it updates the dialog state and returns the effects the caller has to run
//! (read the picked file, call the import backend, show a toast, hand the
//! project over, navigate). The web app interprets the effects; tests drive
//! the reducer directly.

use crate::display_types::ImportedProject;
use crate::stores::notifications::Notification;
use dioxus::prelude::*;
use tracing::{debug, info, warn};

pub const EMPTY_URL_MESSAGE: &str = "Please enter a URL.";
pub const URL_IMPORT_SUCCESS_MESSAGE: &str = "Project imported successfully!";
pub const FILE_IMPORT_SUCCESS_MESSAGE: &str = "Project imported from file!";
pub const FILE_READ_FAILED_MESSAGE: &str = "Failed to read the selected file.";
pub const IMPORT_FAILED_FALLBACK: &str = "Failed to import the project.";

// ============================================================================
// State Types
// ============================================================================

/// How a picked file is turned into a project
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Picking a file reads and imports it right away. The URL path is
    /// disabled afterwards and the dialog stays open.
    #[default]
    Immediate,
    /// Picking a file only stages it. The Import button decides which path
    /// runs, and a staged file wins over a typed URL.
    Staged,
}

/// What the file picker currently holds
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FileSelection {
    #[default]
    Empty,
    /// Picked but not read yet
    Staged { name: String },
    /// Read and handed to the caller (immediate mode only)
    Imported { name: String },
}

impl FileSelection {
    pub fn name(&self) -> Option<&str> {
        match self {
            FileSelection::Empty => None,
            FileSelection::Staged { name } | FileSelection::Imported { name } => {
                Some(name.as_str())
            }
        }
    }
}

/// Which path an in-flight attempt uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportPath {
    File,
    Url,
}

/// The import currently running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InFlightImport {
    pub attempt: u64,
    pub path: ImportPath,
}

/// Dialog state. Everything except `mode` and `last_attempt` is reset
/// whenever the dialog opens or closes.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct LoadProjectState {
    pub mode: ImportMode,
    pub is_open: bool,
    pub url: String,
    pub file: FileSelection,
    pub in_flight: Option<InFlightImport>,
    /// Last attempt id handed out. Never reset, so a completion that outlives
    /// a close/reopen cycle can't be mistaken for the current attempt.
    pub last_attempt: u64,
}

// ============================================================================
// Event Types
// ============================================================================

/// Result of an import attempt
#[derive(Clone, Debug, PartialEq)]
pub enum ImportOutcome {
    Success(ImportedProject),
    /// Nothing to import: no file and an empty URL
    ValidationFailed,
    /// Import failed. `None` falls back to the generic message.
    ImportFailed(Option<String>),
    /// The backend asked the app to go somewhere else instead
    RedirectRequested(String),
}

/// Events that can be dispatched to the dialog
#[derive(Clone, Debug, PartialEq)]
pub enum LoadProjectEvent {
    /// Dialog opened or dismissed (trigger, Escape, backdrop, programmatic)
    SetOpen(bool),
    UrlChanged(String),
    /// User picked a file. The app keeps the file handle itself.
    FileSelected { name: String },
    ImportClicked,
    /// File read finished (from async operation)
    FileRead {
        attempt: u64,
        result: Result<String, String>,
    },
    /// URL import finished (from async operation)
    UrlImportFinished { attempt: u64, outcome: ImportOutcome },
}

/// Work the caller must perform after an event
#[derive(Clone, Debug, PartialEq)]
pub enum LoadProjectEffect {
    /// Read the picked file as text and report back with `FileRead`
    ReadFile { attempt: u64 },
    /// Call the import backend and report back with `UrlImportFinished`
    ImportUrl { attempt: u64, url: String },
    Notify(Notification),
    /// Hand the project to the success callback
    Deliver(ImportedProject),
    Navigate(String),
}

// ============================================================================
// State Machine Implementation
// ============================================================================

impl LoadProjectState {
    pub fn new(mode: ImportMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn file_imported(&self) -> bool {
        matches!(self.file, FileSelection::Imported { .. })
    }

    pub fn file_input_disabled(&self) -> bool {
        self.is_loading() || self.file_imported()
    }

    pub fn url_input_disabled(&self) -> bool {
        self.is_loading() || self.file_imported()
    }

    pub fn import_button_disabled(&self) -> bool {
        self.file_imported()
    }

    /// Key for the file picker element. Changes with every attempt, so the
    /// picker is remounted empty and re-picking the same file after a failed
    /// read fires a fresh `change` event.
    pub fn file_input_generation(&self) -> u64 {
        self.last_attempt
    }

    /// Apply an event and return the effects to run.
    /// This is the core state machine transition function.
    pub fn apply(&mut self, event: LoadProjectEvent) -> Vec<LoadProjectEffect> {
        match event {
            LoadProjectEvent::SetOpen(open) => {
                self.set_open(open);
                vec![]
            }
            LoadProjectEvent::UrlChanged(url) => {
                if self.is_open && !self.url_input_disabled() {
                    self.url = url;
                }
                vec![]
            }
            LoadProjectEvent::FileSelected { name } => self.on_file_selected(name),
            LoadProjectEvent::ImportClicked => self.on_import_clicked(),
            LoadProjectEvent::FileRead { attempt, result } => {
                if !self.finish_attempt(attempt, ImportPath::File) {
                    return vec![];
                }
                match result {
                    Ok(html) => self.on_outcome(
                        ImportOutcome::Success(ImportedProject::from_local_html(html)),
                        ImportPath::File,
                    ),
                    Err(e) => {
                        warn!("Failed to read project file: {}", e);
                        if self.mode == ImportMode::Immediate {
                            self.file = FileSelection::Empty;
                        }
                        vec![LoadProjectEffect::Notify(Notification::error(
                            FILE_READ_FAILED_MESSAGE,
                        ))]
                    }
                }
            }
            LoadProjectEvent::UrlImportFinished { attempt, outcome } => {
                if !self.finish_attempt(attempt, ImportPath::Url) {
                    return vec![];
                }
                self.on_outcome(outcome, ImportPath::Url)
            }
        }
    }

    fn set_open(&mut self, open: bool) {
        if open && self.is_open {
            return;
        }
        if let Some(in_flight) = self.in_flight {
            debug!(
                "Dialog reset with import attempt {} still running",
                in_flight.attempt
            );
        }
        self.is_open = open;
        self.url.clear();
        self.file = FileSelection::Empty;
        self.in_flight = None;
    }

    fn on_file_selected(&mut self, name: String) -> Vec<LoadProjectEffect> {
        if !self.is_open || self.file_input_disabled() {
            return vec![];
        }
        self.file = FileSelection::Staged { name };
        match self.mode {
            ImportMode::Immediate => {
                let attempt = self.begin_attempt(ImportPath::File);
                vec![LoadProjectEffect::ReadFile { attempt }]
            }
            ImportMode::Staged => vec![],
        }
    }

    fn on_import_clicked(&mut self) -> Vec<LoadProjectEffect> {
        if !self.is_open || self.is_loading() || self.import_button_disabled() {
            return vec![];
        }

        if self.mode == ImportMode::Staged && matches!(self.file, FileSelection::Staged { .. }) {
            let attempt = self.begin_attempt(ImportPath::File);
            return vec![LoadProjectEffect::ReadFile { attempt }];
        }

        let url = self.url.trim().to_string();
        if url.is_empty() {
            return self.on_outcome(ImportOutcome::ValidationFailed, ImportPath::Url);
        }

        let attempt = self.begin_attempt(ImportPath::Url);
        info!("Importing project from {}", url);
        vec![LoadProjectEffect::ImportUrl { attempt, url }]
    }

    fn begin_attempt(&mut self, path: ImportPath) -> u64 {
        self.last_attempt += 1;
        let attempt = self.last_attempt;
        self.in_flight = Some(InFlightImport { attempt, path });
        attempt
    }

    /// Clear the in-flight attempt if the completion belongs to it.
    /// Returns false for stale completions, which must be ignored.
    fn finish_attempt(&mut self, attempt: u64, path: ImportPath) -> bool {
        match self.in_flight {
            Some(current) if current.attempt == attempt && current.path == path => {
                self.in_flight = None;
                true
            }
            _ => {
                debug!("Ignoring stale {:?} import attempt {}", path, attempt);
                false
            }
        }
    }

    fn on_outcome(&mut self, outcome: ImportOutcome, path: ImportPath) -> Vec<LoadProjectEffect> {
        match outcome {
            ImportOutcome::Success(project) => {
                info!("Project imported: {}", project.title);
                let message = match path {
                    ImportPath::File => FILE_IMPORT_SUCCESS_MESSAGE,
                    ImportPath::Url => URL_IMPORT_SUCCESS_MESSAGE,
                };
                if path == ImportPath::File && self.mode == ImportMode::Immediate {
                    let name = self.file.name().unwrap_or_default().to_string();
                    self.file = FileSelection::Imported { name };
                } else {
                    self.set_open(false);
                }
                vec![
                    LoadProjectEffect::Deliver(project),
                    LoadProjectEffect::Notify(Notification::success(message)),
                ]
            }
            ImportOutcome::ValidationFailed => {
                vec![LoadProjectEffect::Notify(Notification::error(
                    EMPTY_URL_MESSAGE,
                ))]
            }
            ImportOutcome::ImportFailed(message) => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| IMPORT_FAILED_FALLBACK.to_string());
                warn!("Project import failed: {}", message);
                vec![LoadProjectEffect::Notify(Notification::error(message))]
            }
            ImportOutcome::RedirectRequested(target) => {
                info!("Import redirected to {}", target);
                vec![LoadProjectEffect::Navigate(target)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::notifications::NotificationKind;

    fn open(mode: ImportMode) -> LoadProjectState {
        let mut state = LoadProjectState::new(mode);
        state.apply(LoadProjectEvent::SetOpen(true));
        state
    }

    fn delivered(effects: &[LoadProjectEffect]) -> Vec<&ImportedProject> {
        effects
            .iter()
            .filter_map(|e| match e {
                LoadProjectEffect::Deliver(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn notifications(effects: &[LoadProjectEffect]) -> Vec<&Notification> {
        effects
            .iter()
            .filter_map(|e| match e {
                LoadProjectEffect::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn read_attempt(effects: &[LoadProjectEffect]) -> u64 {
        match effects {
            [LoadProjectEffect::ReadFile { attempt }] => *attempt,
            other => panic!("expected a single ReadFile effect, got {:?}", other),
        }
    }

    fn url_attempt(effects: &[LoadProjectEffect]) -> (u64, String) {
        match effects {
            [LoadProjectEffect::ImportUrl { attempt, url }] => (*attempt, url.clone()),
            other => panic!("expected a single ImportUrl effect, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_url_without_file_fails_validation() {
        for mode in [ImportMode::Immediate, ImportMode::Staged] {
            let mut state = open(mode);
            let effects = state.apply(LoadProjectEvent::ImportClicked);
            assert!(delivered(&effects).is_empty());
            let notes = notifications(&effects);
            assert_eq!(notes.len(), 1);
            assert_eq!(notes[0].kind, NotificationKind::Error);
            assert_eq!(notes[0].message, EMPTY_URL_MESSAGE);
            assert!(state.is_open);
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn test_whitespace_url_fails_validation() {
        let mut state = open(ImportMode::Immediate);
        state.apply(LoadProjectEvent::UrlChanged("   ".into()));
        let effects = state.apply(LoadProjectEvent::ImportClicked);
        assert_eq!(notifications(&effects)[0].message, EMPTY_URL_MESSAGE);
    }

    #[test]
    fn test_immediate_file_import_delivers_once() {
        let mut state = open(ImportMode::Immediate);
        let effects = state.apply(LoadProjectEvent::FileSelected {
            name: "site.html".into(),
        });
        let attempt = read_attempt(&effects);
        assert!(state.is_loading());

        let effects = state.apply(LoadProjectEvent::FileRead {
            attempt,
            result: Ok("<html>hello</html>".into()),
        });
        let projects = delivered(&effects);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].html, "<html>hello</html>");
        assert_eq!(projects[0].title, "Imported Project");
        assert_eq!(
            notifications(&effects)[0].message,
            FILE_IMPORT_SUCCESS_MESSAGE
        );

        // Immediate mode keeps the dialog open with the URL path disabled
        assert!(state.is_open);
        assert!(state.file_imported());
        assert!(state.url_input_disabled());
        assert!(state.import_button_disabled());

        // A duplicate completion for the same attempt is ignored
        let effects = state.apply(LoadProjectEvent::FileRead {
            attempt,
            result: Ok("<html>again</html>".into()),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_immediate_mode_ignores_url_after_file_import() {
        let mut state = open(ImportMode::Immediate);
        let attempt = read_attempt(&state.apply(LoadProjectEvent::FileSelected {
            name: "a.html".into(),
        }));
        state.apply(LoadProjectEvent::FileRead {
            attempt,
            result: Ok("<p></p>".into()),
        });

        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        assert!(state.url.is_empty());
        assert!(state.apply(LoadProjectEvent::ImportClicked).is_empty());
        assert!(state
            .apply(LoadProjectEvent::FileSelected {
                name: "b.html".into()
            })
            .is_empty());
    }

    #[test]
    fn test_staged_file_waits_for_import_click() {
        let mut state = open(ImportMode::Staged);
        let effects = state.apply(LoadProjectEvent::FileSelected {
            name: "site.html".into(),
        });
        assert!(effects.is_empty());
        assert_eq!(
            state.file,
            FileSelection::Staged {
                name: "site.html".into()
            }
        );
        assert!(!state.is_loading());

        let attempt = read_attempt(&state.apply(LoadProjectEvent::ImportClicked));
        let effects = state.apply(LoadProjectEvent::FileRead {
            attempt,
            result: Ok("<main></main>".into()),
        });
        assert_eq!(delivered(&effects).len(), 1);
        // Staged mode closes and resets on success
        assert!(!state.is_open);
        assert_eq!(state.file, FileSelection::Empty);
    }

    #[test]
    fn test_staged_file_takes_precedence_over_url() {
        let mut state = open(ImportMode::Staged);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com/p".into()));
        state.apply(LoadProjectEvent::FileSelected {
            name: "site.html".into(),
        });

        let effects = state.apply(LoadProjectEvent::ImportClicked);
        assert!(matches!(effects[..], [LoadProjectEffect::ReadFile { .. }]));
        assert!(!effects
            .iter()
            .any(|e| matches!(e, LoadProjectEffect::ImportUrl { .. })));
    }

    #[test]
    fn test_close_resets_transient_state() {
        let mut state = open(ImportMode::Staged);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        state.apply(LoadProjectEvent::FileSelected {
            name: "site.html".into(),
        });

        state.apply(LoadProjectEvent::SetOpen(false));
        state.apply(LoadProjectEvent::SetOpen(true));

        assert!(state.is_open);
        assert!(state.url.is_empty());
        assert_eq!(state.file, FileSelection::Empty);
        assert!(!state.is_loading());
        assert_eq!(state.mode, ImportMode::Staged);
    }

    #[test]
    fn test_import_click_while_loading_is_noop() {
        let mut state = open(ImportMode::Immediate);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        let (attempt, url) = url_attempt(&state.apply(LoadProjectEvent::ImportClicked));
        assert_eq!(url, "https://example.com");

        assert!(state.apply(LoadProjectEvent::ImportClicked).is_empty());
        assert!(state.apply(LoadProjectEvent::ImportClicked).is_empty());

        let project = ImportedProject::from_local_html("<p>remote</p>");
        let effects = state.apply(LoadProjectEvent::UrlImportFinished {
            attempt,
            outcome: ImportOutcome::Success(project),
        });
        assert_eq!(delivered(&effects).len(), 1);
        assert_eq!(notifications(&effects).len(), 1);
        assert_eq!(
            notifications(&effects)[0].message,
            URL_IMPORT_SUCCESS_MESSAGE
        );
        assert!(!state.is_open);
    }

    #[test]
    fn test_file_selection_while_url_import_running_is_ignored() {
        let mut state = open(ImportMode::Immediate);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        state.apply(LoadProjectEvent::ImportClicked);
        let effects = state.apply(LoadProjectEvent::FileSelected {
            name: "site.html".into(),
        });
        assert!(effects.is_empty());
        assert_eq!(state.file, FileSelection::Empty);
    }

    #[test]
    fn test_redirect_navigates_without_error() {
        let mut state = open(ImportMode::Staged);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        let (attempt, _) = url_attempt(&state.apply(LoadProjectEvent::ImportClicked));

        let effects = state.apply(LoadProjectEvent::UrlImportFinished {
            attempt,
            outcome: ImportOutcome::RedirectRequested("/pricing".into()),
        });
        assert_eq!(effects, vec![LoadProjectEffect::Navigate("/pricing".into())]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_import_error_uses_server_message() {
        let mut state = open(ImportMode::Staged);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        let (attempt, _) = url_attempt(&state.apply(LoadProjectEvent::ImportClicked));

        let effects = state.apply(LoadProjectEvent::UrlImportFinished {
            attempt,
            outcome: ImportOutcome::ImportFailed(Some("Space not found".into())),
        });
        let notes = notifications(&effects);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, "Space not found");
        assert!(delivered(&effects).is_empty());

        // The dialog stays usable after an error
        assert!(state.is_open);
        assert!(!state.is_loading());
        assert_eq!(state.url, "https://example.com");
    }

    #[test]
    fn test_import_error_without_message_uses_fallback() {
        let mut state = open(ImportMode::Immediate);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        let (attempt, _) = url_attempt(&state.apply(LoadProjectEvent::ImportClicked));

        let effects = state.apply(LoadProjectEvent::UrlImportFinished {
            attempt,
            outcome: ImportOutcome::ImportFailed(None),
        });
        assert_eq!(notifications(&effects)[0].message, IMPORT_FAILED_FALLBACK);
    }

    #[test]
    fn test_file_read_failure_keeps_dialog_usable() {
        let mut state = open(ImportMode::Immediate);
        let attempt = read_attempt(&state.apply(LoadProjectEvent::FileSelected {
            name: "broken.html".into(),
        }));
        let effects = state.apply(LoadProjectEvent::FileRead {
            attempt,
            result: Err("not valid UTF-8".into()),
        });
        assert!(delivered(&effects).is_empty());
        assert_eq!(notifications(&effects)[0].message, FILE_READ_FAILED_MESSAGE);
        assert!(state.is_open);
        assert!(!state.file_input_disabled());
        assert!(!state.url_input_disabled());
    }

    #[test]
    fn test_repicking_after_failed_read_starts_new_attempt() {
        let mut state = open(ImportMode::Immediate);
        let before = state.file_input_generation();
        let first = read_attempt(&state.apply(LoadProjectEvent::FileSelected {
            name: "site.html".into(),
        }));
        state.apply(LoadProjectEvent::FileRead {
            attempt: first,
            result: Err("read aborted".into()),
        });
        assert_eq!(state.file, FileSelection::Empty);
        assert_ne!(state.file_input_generation(), before);

        let second = read_attempt(&state.apply(LoadProjectEvent::FileSelected {
            name: "site.html".into(),
        }));
        assert_ne!(first, second);
        assert_ne!(state.file_input_generation(), before);
    }

    #[test]
    fn test_staged_read_failure_keeps_file_for_retry() {
        let mut state = open(ImportMode::Staged);
        state.apply(LoadProjectEvent::FileSelected {
            name: "site.html".into(),
        });
        let first = read_attempt(&state.apply(LoadProjectEvent::ImportClicked));

        let effects = state.apply(LoadProjectEvent::FileRead {
            attempt: first,
            result: Err("permission denied".into()),
        });
        assert!(delivered(&effects).is_empty());
        assert_eq!(notifications(&effects)[0].message, FILE_READ_FAILED_MESSAGE);
        assert_eq!(
            state.file,
            FileSelection::Staged {
                name: "site.html".into()
            }
        );
        assert!(state.is_open);

        let retry = read_attempt(&state.apply(LoadProjectEvent::ImportClicked));
        assert_ne!(retry, first);
    }

    #[test]
    fn test_blank_server_message_uses_fallback() {
        let mut state = open(ImportMode::Staged);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        let (attempt, _) = url_attempt(&state.apply(LoadProjectEvent::ImportClicked));

        let effects = state.apply(LoadProjectEvent::UrlImportFinished {
            attempt,
            outcome: ImportOutcome::ImportFailed(Some("  ".into())),
        });
        let notes = notifications(&effects);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, IMPORT_FAILED_FALLBACK);
    }

    #[test]
    fn test_completion_after_close_is_dropped() {
        let mut state = open(ImportMode::Staged);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        let (attempt, _) = url_attempt(&state.apply(LoadProjectEvent::ImportClicked));

        state.apply(LoadProjectEvent::SetOpen(false));
        state.apply(LoadProjectEvent::SetOpen(true));

        let effects = state.apply(LoadProjectEvent::UrlImportFinished {
            attempt,
            outcome: ImportOutcome::Success(ImportedProject::from_local_html("<p></p>")),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_attempt_ids_survive_reset() {
        let mut state = open(ImportMode::Immediate);
        state.apply(LoadProjectEvent::UrlChanged("https://a.example".into()));
        let (first, _) = url_attempt(&state.apply(LoadProjectEvent::ImportClicked));
        state.apply(LoadProjectEvent::SetOpen(false));
        state.apply(LoadProjectEvent::SetOpen(true));
        state.apply(LoadProjectEvent::UrlChanged("https://b.example".into()));
        let (second, _) = url_attempt(&state.apply(LoadProjectEvent::ImportClicked));
        assert_ne!(first, second);
    }

    #[test]
    fn test_events_ignored_while_closed() {
        let mut state = LoadProjectState::new(ImportMode::Immediate);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        assert!(state.url.is_empty());
        assert!(state.apply(LoadProjectEvent::ImportClicked).is_empty());
        assert!(state
            .apply(LoadProjectEvent::FileSelected {
                name: "site.html".into()
            })
            .is_empty());
    }

    #[test]
    fn test_reopening_open_dialog_keeps_input() {
        let mut state = open(ImportMode::Immediate);
        state.apply(LoadProjectEvent::UrlChanged("https://example.com".into()));
        state.apply(LoadProjectEvent::SetOpen(true));
        assert_eq!(state.url, "https://example.com");
    }
}
