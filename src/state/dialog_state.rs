//! Presentation-side state of the upload dialog.
//!
//! The controller owns the session; this only holds what the dialog itself
//! needs between frames.

use workhub::DropZoneTracker;

/// State kept by the upload dialog between frames.
#[derive(Debug, Clone, Default)]
pub struct DialogState {
    /// Converts per-frame hover snapshots into drag events
    drop_zone: DropZoneTracker,
    /// Hint shown after a file was rejected for its type
    rejection_hint: Option<String>,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything, e.g. when the dialog closes.
    pub fn reset(&mut self) {
        self.drop_zone.reset();
        self.rejection_hint = None;
    }

    pub fn rejection_hint(&self) -> Option<&str> {
        self.rejection_hint.as_deref()
    }

    pub fn set_rejection_hint(&mut self, hint: String) {
        self.rejection_hint = Some(hint);
    }

    pub fn clear_rejection_hint(&mut self) {
        self.rejection_hint = None;
    }

    pub fn drop_zone_mut(&mut self) -> &mut DropZoneTracker {
        &mut self.drop_zone
    }
}
