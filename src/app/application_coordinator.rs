//! Application-level coordination and workflow management.
//!
//! Routes dialog interactions into the upload controller, drives the
//! progress simulation once per frame, and applies completed uploads to the
//! profile.

use std::path::Path;

use tracing::{info, warn};
use workhub::{DragEventKind, FileHandle, Selection, UploadStatus};

use crate::app::AppState;
use crate::io::UploadInbox;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Opening and cancelling the upload dialog
/// - Forwarding drag events and file offers
/// - Polling the upload simulation
/// - Applying completed uploads to the profile
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Opens the photo upload dialog with a fresh session.
    pub fn open_upload_dialog(state: &mut AppState) {
        if !state.upload.is_open() {
            state.dialog.reset();
            state.clear_messages();
        }
        state.upload.open_modal();
    }

    /// Cancels the dialog, abandoning any running upload.
    pub fn cancel_upload_dialog(state: &mut AppState) {
        let was_uploading = state.upload.is_uploading();
        state.upload.close_modal();
        state.dialog.reset();

        if was_uploading {
            state.status_message = Some("Upload cancelled".to_string());
        }
    }

    /// Forwards a drag event from the drop zone.
    pub fn handle_drag_event(state: &mut AppState, kind: DragEventKind) {
        state.upload.on_drag_event(kind);
    }

    /// Offers a file from the picker or a drop to the controller.
    ///
    /// Rejections for type get an inline hint; other rejections stay silent.
    pub fn offer_file(state: &mut AppState, file: FileHandle) {
        let name = file.name().to_string();
        match state.upload.select_file(file) {
            Selection::Accepted => state.dialog.clear_rejection_hint(),
            Selection::UnsupportedType => {
                state.dialog.set_rejection_hint(format!(
                    "{} is not a supported image. Use PNG, JPEG or WebP.",
                    name
                ));
            }
            Selection::Busy | Selection::Inactive => {}
        }
    }

    /// Handles a path chosen in the native file picker.
    ///
    /// Remembers the containing directory for the next picker.
    pub fn handle_picked_path(state: &mut AppState, path: &Path) {
        if let Some(parent) = path.parent() {
            state.picker_directory = Some(parent.to_path_buf());
        }

        match FileHandle::from_path(path) {
            Ok(file) => Self::offer_file(state, file),
            Err(e) => {
                warn!(error = %e, "could not use picked file");
                state.dialog.set_rejection_hint(format!("Could not use this file: {:#}", e));
            }
        }
    }

    /// Starts the upload of the selected file.
    pub fn save_upload(state: &mut AppState) {
        state.upload.save();
    }

    /// Advances the upload simulation and applies finished uploads.
    ///
    /// Called once per frame in the update loop. Requests a repaint for the
    /// next simulation step so progress keeps moving without user input.
    pub fn drive_upload(state: &mut AppState, inbox: &UploadInbox, ctx: &egui::Context) {
        if Self::advance_upload(state, inbox) {
            ctx.request_repaint();
        } else if let Some(wait) = state.upload.next_deadline() {
            ctx.request_repaint_after(wait);
        }
    }

    /// Polls the controller and drains the inbox.
    ///
    /// Returns true if an upload completed during this call.
    pub fn advance_upload(state: &mut AppState, inbox: &UploadInbox) -> bool {
        let completed = match state.upload.poll() {
            UploadStatus::Completed(file) => {
                state.dialog.reset();
                state.status_message = Some(format!("Profile photo updated: {}", file.name()));
                true
            }
            UploadStatus::InProgress(_) | UploadStatus::Idle => false,
        };

        for file in inbox.drain() {
            info!(file = file.name(), "profile photo applied");
            state.profile.apply_upload(file);
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workhub::{SystemClock, UploadController, UploadTiming};

    /// Zero delays let a single poll run the whole simulation.
    fn instant_state() -> (AppState, UploadInbox) {
        let (inbox, sender) = UploadInbox::new();
        let timing = UploadTiming {
            step_interval_ms: 0,
            step_percent: 10,
            settle_delay_ms: 0,
        };
        let controller = UploadController::with_clock(SystemClock, timing, sender);
        (AppState::new(controller, None), inbox)
    }

    #[test]
    fn test_full_upload_updates_profile() {
        let (mut state, inbox) = instant_state();

        ApplicationCoordinator::open_upload_dialog(&mut state);
        ApplicationCoordinator::offer_file(&mut state, FileHandle::new("me.png", "image/png"));
        ApplicationCoordinator::save_upload(&mut state);

        assert!(ApplicationCoordinator::advance_upload(&mut state, &inbox));
        assert!(!state.upload.is_open());
        assert_eq!(state.profile.photo().map(|f| f.name()), Some("me.png"));
        assert_eq!(state.status_message.as_deref(), Some("Profile photo updated: me.png"));
    }

    #[test]
    fn test_unsupported_type_sets_hint() {
        let (mut state, _inbox) = instant_state();

        ApplicationCoordinator::open_upload_dialog(&mut state);
        ApplicationCoordinator::offer_file(&mut state, FileHandle::new("anim.gif", "image/gif"));
        assert!(state.dialog.rejection_hint().is_some());
        assert!(state.upload.selected_file().is_none());

        ApplicationCoordinator::offer_file(&mut state, FileHandle::new("ok.jpg", "image/jpeg"));
        assert!(state.dialog.rejection_hint().is_none());
    }

    #[test]
    fn test_cancel_leaves_profile_untouched() {
        let (mut state, inbox) = instant_state();

        ApplicationCoordinator::open_upload_dialog(&mut state);
        ApplicationCoordinator::offer_file(&mut state, FileHandle::new("me.png", "image/png"));
        ApplicationCoordinator::save_upload(&mut state);
        ApplicationCoordinator::cancel_upload_dialog(&mut state);

        assert!(!ApplicationCoordinator::advance_upload(&mut state, &inbox));
        assert!(state.profile.photo().is_none());
        assert_eq!(state.status_message.as_deref(), Some("Upload cancelled"));
    }

    #[test]
    fn test_picked_path_remembers_directory() {
        let (mut state, _inbox) = instant_state();

        ApplicationCoordinator::open_upload_dialog(&mut state);
        ApplicationCoordinator::handle_picked_path(&mut state, Path::new("/home/alex/photos/me.webp"));

        assert_eq!(state.picker_directory.as_deref(), Some(Path::new("/home/alex/photos")));
        assert_eq!(state.upload.selected_file().map(|f| f.name()), Some("me.webp"));
    }

    #[test]
    fn test_drag_events_reach_controller() {
        let (mut state, _inbox) = instant_state();

        ApplicationCoordinator::open_upload_dialog(&mut state);
        ApplicationCoordinator::handle_drag_event(&mut state, DragEventKind::Enter);
        assert!(state.upload.is_drag_active());
        ApplicationCoordinator::handle_drag_event(&mut state, DragEventKind::DropPending);
        assert!(!state.upload.is_drag_active());
    }
}
