//! State management modules for the WorkHub desktop client.
//!
//! This module contains state-only logic (no UI concerns):
//! - Profile state (worker details, current photo, upload history)
//! - Dialog state (drop-zone tracking, rejection hint)

mod profile_state;
mod dialog_state;

pub use profile_state::ProfileState;
pub use dialog_state::DialogState;
