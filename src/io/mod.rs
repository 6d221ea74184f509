//! I/O modules for handing completed uploads to the application.

pub mod upload_inbox;

// Re-export commonly used types
pub use upload_inbox::{UploadInbox, InboxSender};
