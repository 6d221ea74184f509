//! Profile panel UI rendering
//!
//! Shows the worker's photo (or initials), details, and upload history.

use eframe::egui;
use egui::{Color32, RichText};

use crate::app::AppState;

const AVATAR_SIZE: f32 = 72.0;

/// Result of user interaction with the profile panel
pub enum ProfileInteraction {
    /// User clicked "Change photo"
    ChangePhotoRequested,
}

/// Renders the worker profile.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<ProfileInteraction>` - User interaction result
pub fn render_profile_panel(ui: &mut egui::Ui, state: &AppState) -> Option<ProfileInteraction> {
    let mut interaction = None;
    let profile = &state.profile;

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, ui.visuals().selection.bg_fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            profile.initials(),
            egui::FontId::proportional(26.0),
            Color32::WHITE,
        );

        ui.vertical(|ui| {
            ui.heading(profile.display_name());
            ui.label(profile.headline());
            match profile.photo() {
                Some(photo) => ui.label(RichText::new(format!("Photo: {}", photo.name())).weak()),
                None => ui.label(RichText::new("No profile photo yet").weak()),
            };
            if ui.button("📷 Change photo").clicked() {
                interaction = Some(ProfileInteraction::ChangePhotoRequested);
            }
        });
    });

    ui.add_space(12.0);
    ui.separator();
    ui.label(RichText::new("Upload history").strong());

    if profile.upload_history().is_empty() {
        ui.label(RichText::new("Nothing uploaded yet").weak());
    } else {
        for file in profile.upload_history() {
            ui.label(format!("{}  ({})", file.name(), file.mime_type()));
        }
    }

    interaction
}
