//! UI panel rendering subsystem
//!
//! This module contains all UI rendering for the WorkHub desktop client:
//! - Profile panel (worker details, photo, upload history)
//! - Upload dialog (drop zone, picker, progress, save/cancel)
//! - Status bar (dialog phase and last outcome)
//! - Panel manager (panel orchestration and layout)

pub mod profile_panel;
pub mod upload_dialog;
pub mod status_bar;
pub mod panel_manager;
