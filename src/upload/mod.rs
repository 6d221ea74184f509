//! Image upload interaction: file selection, drag tracking, and the
//! simulated progressive upload behind the profile photo dialog.

pub mod config;
pub mod controller;
pub mod drop_zone;
pub mod file_handle;
pub mod session;
pub mod timer;

pub use config::UploadTiming;
pub use controller::{DragEventKind, Selection, UploadController, UploadStatus};
pub use drop_zone::DropZoneTracker;
pub use file_handle::{
    is_accepted_mime, mime_type_for_name, FileHandle, ACCEPTED_MIME_TYPES, ACCEPT_FILTER,
    PICKER_EXTENSIONS,
};
pub use session::{UploadPhase, UploadSession};
pub use timer::{ProgressTimer, TimerStage, TimerTicket};
