pub mod traits;
pub mod clock;
pub mod upload;
pub mod logging;

// Export traits
pub use traits::{Clock, UploadHandler};

// Export clocks
pub use clock::{ManualClock, SystemClock};

// Export upload controller
pub use upload::{
    DragEventKind, DropZoneTracker, FileHandle, Selection,
    UploadController, UploadPhase, UploadSession, UploadStatus, UploadTiming
};
