//! Centralized application state for the WorkHub desktop client.
//!
//! Composes focused state components, each keeping its own invariants:
//! - The upload controller owns the photo upload session
//! - Dialog state holds presentation-only details of the upload dialog
//! - Profile state holds what the profile page displays

use std::path::PathBuf;

use workhub::UploadController;

use crate::state::{DialogState, ProfileState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Worker profile shown on the main page
    pub profile: ProfileState,

    /// Photo upload controller (session, timer, hand-off)
    pub upload: UploadController,

    /// Presentation state of the upload dialog
    pub dialog: DialogState,

    // ===== Top-Level State =====
    /// Directory the file picker opens in
    pub picker_directory: Option<PathBuf>,

    /// Short confirmation shown in the status bar
    pub status_message: Option<String>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates application state around an upload controller.
    ///
    /// # Arguments
    /// * `upload` - Controller whose handler feeds the application's inbox
    /// * `picker_directory` - Last directory used by the file picker, if known
    pub fn new(upload: UploadController, picker_directory: Option<PathBuf>) -> Self {
        Self {
            profile: ProfileState::new(),
            upload,
            dialog: DialogState::new(),
            picker_directory,
            status_message: None,
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Clears transient messages when a new dialog session starts.
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}
