//! Upload dialog UI rendering
//!
//! Renders the profile photo dialog from upload controller state and turns
//! user input (drags, drops, picker, buttons) into interactions. The dialog
//! holds no upload logic of its own.

use std::path::{Path, PathBuf};

use eframe::egui;
use egui::{Color32, RichText};
use workhub::upload::{ACCEPT_FILTER, PICKER_EXTENSIONS};
use workhub::{DragEventKind, FileHandle};

use crate::app::AppState;

/// Result of user interaction with the upload dialog
#[derive(Debug, Clone, PartialEq)]
pub enum DialogInteraction {
    /// Drag state changed over the window
    Drag(DragEventKind),
    /// A file was dropped onto the window
    FileDropped(FileHandle),
    /// A file was chosen in the native picker
    FilePicked(PathBuf),
    /// User clicked "Save"
    SaveRequested,
    /// User clicked "Cancel", pressed Escape, or clicked outside
    CancelRequested,
}

/// Renders the upload dialog if the controller has it open.
///
/// # Arguments
/// * `ctx` - The egui context
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Vec<DialogInteraction>` - Interactions in the order they happened
pub fn render_upload_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<DialogInteraction> {
    let mut interactions = Vec::new();

    if !state.upload.is_open() {
        return interactions;
    }

    let uploading = state.upload.is_uploading();

    // Only the first file of a multi-file drop is considered
    let (hovering, dropped) = ctx.input(|i| {
        (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.first().cloned())
    });
    for kind in state.dialog.drop_zone_mut().update(hovering, dropped.is_some()) {
        interactions.push(DialogInteraction::Drag(kind));
    }
    if let Some(file) = dropped {
        if !uploading {
            interactions.push(DialogInteraction::FileDropped(FileHandle::from_dropped(
                &file.name,
                &file.mime,
                file.path.as_deref(),
            )));
        }
    }

    let state = &*state;
    let modal = egui::Modal::new(egui::Id::new("upload_dialog")).show(ctx, |ui| {
        ui.set_width(380.0);
        ui.heading("Update profile photo");
        ui.add_space(8.0);

        render_drop_zone(ui, state, uploading, &mut interactions);

        ui.add_space(8.0);
        if let Some(file) = state.upload.selected_file() {
            ui.label(format!("Selected: {}", file.name()));
        } else {
            ui.label(RichText::new("No file selected").weak());
        }

        if let Some(hint) = state.dialog.rejection_hint() {
            ui.colored_label(Color32::RED, hint);
        }

        if uploading {
            let fraction = f32::from(state.upload.upload_progress()) / 100.0;
            ui.add(egui::ProgressBar::new(fraction).show_percentage());
        }

        ui.separator();

        ui.horizontal(|ui| {
            let can_save = state.upload.selected_file().is_some() && !uploading;
            if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                interactions.push(DialogInteraction::SaveRequested);
            }
            if ui.button("Cancel").clicked() {
                interactions.push(DialogInteraction::CancelRequested);
            }
        });
    });

    if modal.should_close() && !interactions.contains(&DialogInteraction::CancelRequested) {
        interactions.push(DialogInteraction::CancelRequested);
    }

    interactions
}

/// Renders the drop target with its "Browse…" button.
fn render_drop_zone(
    ui: &mut egui::Ui,
    state: &AppState,
    uploading: bool,
    interactions: &mut Vec<DialogInteraction>,
) {
    let active = state.upload.is_drag_active() && !uploading;
    let accent = ui.visuals().selection.bg_fill;
    let (stroke_color, fill) = if active {
        (accent, accent.gamma_multiply(0.15))
    } else {
        (ui.visuals().widgets.noninteractive.bg_stroke.color, Color32::TRANSPARENT)
    };

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .fill(fill)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), 110.0));
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                let prompt = if active { "Release to use this image" } else { "Drag an image here" };
                ui.label(RichText::new(prompt).strong());
                ui.label(RichText::new(format!("Accepted: {}", ACCEPT_FILTER)).weak());
                ui.add_space(4.0);

                if ui.add_enabled(!uploading, egui::Button::new("📁 Browse…")).clicked() {
                    if let Some(path) = pick_image(state.picker_directory.as_deref()) {
                        interactions.push(DialogInteraction::FilePicked(path));
                    }
                }
            });
        });
}

/// Opens the native file picker filtered to accepted image types.
fn pick_image(directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().add_filter("Images", &PICKER_EXTENSIONS[..]);

    if let Some(dir) = directory {
        dialog = dialog.set_directory(dir);
    } else if let Ok(cwd) = std::env::current_dir() {
        dialog = dialog.set_directory(cwd);
    }

    dialog.pick_file()
}
