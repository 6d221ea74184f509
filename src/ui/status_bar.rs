//! Status bar UI rendering
//!
//! Shows the last upload outcome and the current dialog phase.

use eframe::egui;
use egui::{Color32, RichText};
use workhub::UploadPhase;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let phase = match state.upload.phase() {
            UploadPhase::Closed => "Ready".to_string(),
            UploadPhase::Idle => "Choosing photo".to_string(),
            UploadPhase::FileSelected => "Photo selected".to_string(),
            UploadPhase::Uploading => format!("Uploading {}%", state.upload.upload_progress()),
        };
        ui.label(RichText::new(phase).strong());

        if let Some(message) = &state.status_message {
            ui.label(RichText::new("|").strong());
            ui.label(message);
        }

        if let Some(error) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.colored_label(Color32::RED, error);
        }
    });
}
