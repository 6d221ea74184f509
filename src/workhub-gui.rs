//! WorkHub desktop client
//!
//! Native client for the WorkHub services marketplace, built with egui. This
//! binary hosts the worker profile page and its profile photo dialog:
//! - Drag-and-drop or file picker selection of PNG, JPEG and WebP images
//! - Simulated progressive upload with cancellation
//! - Persistent preferences (upload timing, last picker directory)
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, coordination, and settings persistence
//! - `state/` - Profile and dialog state
//! - `io/` - Delivery of completed uploads into application state
//! - `ui/` - Panel rendering and input translation

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use tracing::info;

mod app;
mod io;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, Preferences, SettingsCoordinator};
use io::UploadInbox;
use ui::panel_manager::{PanelInteraction, PanelManager};
use ui::upload_dialog::DialogInteraction;
use workhub::{SystemClock, UploadController};

/// Main application entry point that initializes logging and launches the GUI.
fn main() -> eframe::Result {
    if let Err(e) = workhub::logging::init_logging() {
        eprintln!("Warning: {:#}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("WorkHub")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "WorkHub",
        options,
        Box::new(|cc| Ok(Box::new(WorkhubApp::new(cc)))),
    )
}

/// The WorkHub desktop application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` routes interactions and drives uploads
/// - `SettingsCoordinator` restores and persists preferences
/// - `PanelManager` handles UI panel layout and rendering
struct WorkhubApp {
    /// Centralized application state
    state: AppState,
    /// Completed uploads waiting to be applied
    inbox: UploadInbox,
}

impl WorkhubApp {
    /// Creates the application with preferences loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let preferences = SettingsCoordinator::load_preferences(cc.storage);
        info!(timing = ?preferences.upload_timing, "preferences loaded");

        let (inbox, sender) = UploadInbox::new();
        let upload = UploadController::with_clock(SystemClock, preferences.upload_timing, sender);

        Self {
            state: AppState::new(upload, preferences.picker_directory),
            inbox,
        }
    }

    fn preferences(&self) -> Preferences {
        Preferences {
            upload_timing: self.state.upload.timing(),
            picker_directory: self.state.picker_directory.clone(),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ChangePhotoRequested => {
                ApplicationCoordinator::open_upload_dialog(&mut self.state);
            }
            PanelInteraction::Dialog(DialogInteraction::Drag(kind)) => {
                ApplicationCoordinator::handle_drag_event(&mut self.state, kind);
            }
            PanelInteraction::Dialog(DialogInteraction::FileDropped(file)) => {
                ApplicationCoordinator::offer_file(&mut self.state, file);
            }
            PanelInteraction::Dialog(DialogInteraction::FilePicked(path)) => {
                ApplicationCoordinator::handle_picked_path(&mut self.state, &path);
            }
            PanelInteraction::Dialog(DialogInteraction::SaveRequested) => {
                ApplicationCoordinator::save_upload(&mut self.state);
            }
            PanelInteraction::Dialog(DialogInteraction::CancelRequested) => {
                ApplicationCoordinator::cancel_upload_dialog(&mut self.state);
            }
        }
    }
}

impl eframe::App for WorkhubApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_preferences(storage, &self.preferences());
    }

    /// Main update loop.
    ///
    /// 1. Advance the upload simulation and apply finished uploads
    /// 2. Render all panels via PanelManager
    /// 3. Handle panel interactions in order
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::drive_upload(&mut self.state, &self.inbox, ctx);

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
