use std::time::Instant;

use crate::upload::FileHandle;

/// Source of monotonic time for the upload controller.
///
/// The controller never sleeps or spawns timers of its own. It records
/// deadlines against this clock and applies whatever is due when polled, so
/// tests can drive it with a virtual clock instead of real time.
pub trait Clock {
    /// Returns the current instant
    fn now(&self) -> Instant;
}

/// Receiver of completed uploads (the `on_upload` collaborator).
///
/// Called exactly once per successful save, after progress reached 100% and
/// the settle delay elapsed, and before the session is reset. Never called for
/// a cancelled session.
///
/// Persisting the file is the implementor's job; the controller does not
/// retry or wait for the result.
pub trait UploadHandler {
    /// Receives the file of a completed upload
    fn on_upload(&mut self, file: &FileHandle);
}

impl<F> UploadHandler for F
where
    F: FnMut(&FileHandle),
{
    fn on_upload(&mut self, file: &FileHandle) {
        self(file)
    }
}
