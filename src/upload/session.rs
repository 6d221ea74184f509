//! State of one open-to-closed lifecycle of the upload dialog.

use crate::upload::FileHandle;

/// Projection of the session onto the dialog's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// Dialog not presented
    Closed,
    /// Dialog open, nothing chosen
    Idle,
    /// Dialog open with a candidate file
    FileSelected,
    /// Simulated transfer running
    Uploading,
}

/// The single mutable state object owned by an upload controller.
///
/// Responsibilities:
/// - Tracking whether the dialog is open
/// - Counting nested drag-enter events
/// - Holding the current candidate file
/// - Holding upload flag and progress
///
/// `is_drag_active` is derived from the drag depth so the two can never
/// disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSession {
    is_open: bool,
    drag_depth: u32,
    selected_file: Option<FileHandle>,
    is_uploading: bool,
    upload_progress: u8,
}

impl UploadSession {
    /// Creates a closed session with every field at its initial value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ===== Queries =====

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn drag_depth(&self) -> u32 {
        self.drag_depth
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_depth > 0
    }

    pub fn selected_file(&self) -> Option<&FileHandle> {
        self.selected_file.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    /// Progress in percent, within 0..=100.
    pub fn upload_progress(&self) -> u8 {
        self.upload_progress
    }

    pub fn phase(&self) -> UploadPhase {
        if !self.is_open {
            UploadPhase::Closed
        } else if self.is_uploading {
            UploadPhase::Uploading
        } else if self.selected_file.is_some() {
            UploadPhase::FileSelected
        } else {
            UploadPhase::Idle
        }
    }

    // ===== Mutations =====

    /// Starts a fresh session with the dialog open.
    pub(crate) fn open(&mut self) {
        self.reset();
        self.is_open = true;
    }

    pub(crate) fn drag_enter(&mut self) {
        self.drag_depth = self.drag_depth.saturating_add(1);
    }

    pub(crate) fn drag_leave(&mut self) {
        self.drag_depth = self.drag_depth.saturating_sub(1);
    }

    pub(crate) fn drag_reset(&mut self) {
        self.drag_depth = 0;
    }

    /// Replaces the candidate file outright.
    pub(crate) fn select(&mut self, file: FileHandle) {
        self.selected_file = Some(file);
    }

    pub(crate) fn begin_upload(&mut self) {
        self.is_uploading = true;
        self.upload_progress = 0;
    }

    /// Adds `step` percent, clamped at 100, and returns the new value.
    pub(crate) fn advance_progress(&mut self, step: u8) -> u8 {
        self.upload_progress = self.upload_progress.saturating_add(step).min(100);
        self.upload_progress
    }
}
