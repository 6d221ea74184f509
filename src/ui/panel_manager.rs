//! Panel orchestration and layout management.
//!
//! Coordinates the header, profile, status bar, and upload dialog, and
//! collects their interactions for the application coordinator.

use crate::app::AppState;
use crate::ui::upload_dialog::DialogInteraction;
use crate::ui::{profile_panel, status_bar, upload_dialog};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User asked to change the profile photo
    ChangePhotoRequested,
    /// Interaction inside the upload dialog
    Dialog(DialogInteraction),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("WorkHub");
                ui.separator();
                ui.label("Profile");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(profile_panel::ProfileInteraction::ChangePhotoRequested) =
                profile_panel::render_profile_panel(ui, state)
            {
                interactions.push(PanelInteraction::ChangePhotoRequested);
            }
        });

        interactions.extend(
            upload_dialog::render_upload_dialog(ctx, state)
                .into_iter()
                .map(PanelInteraction::Dialog),
        );

        interactions
    }
}
