//! Delivery of completed uploads to the application.
//!
//! The upload controller hands finished files to an [`UploadHandler`]. The
//! handler here only forwards them over a channel, and the application drains
//! the channel once per frame, so the controller never borrows application
//! state.

use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::warn;
use workhub::{FileHandle, UploadHandler};

/// Receiving end, drained by the application each frame.
pub struct UploadInbox {
    receiver: Receiver<FileHandle>,
}

/// Sending end, owned by the upload controller.
pub struct InboxSender {
    sender: Sender<FileHandle>,
}

impl UploadInbox {
    /// Creates a connected inbox/sender pair.
    pub fn new() -> (Self, InboxSender) {
        let (sender, receiver) = channel();
        (Self { receiver }, InboxSender { sender })
    }

    /// Returns every file delivered since the last call.
    pub fn drain(&self) -> Vec<FileHandle> {
        self.receiver.try_iter().collect()
    }
}

impl UploadHandler for InboxSender {
    fn on_upload(&mut self, file: &FileHandle) {
        if self.sender.send(file.clone()).is_err() {
            warn!(file = file.name(), "upload inbox closed, dropping completed upload");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_when_empty() {
        let (inbox, _sender) = UploadInbox::new();
        assert!(inbox.drain().is_empty());
    }

    #[test]
    fn test_delivery_in_order() {
        let (inbox, mut sender) = UploadInbox::new();
        sender.on_upload(&FileHandle::new("a.png", "image/png"));
        sender.on_upload(&FileHandle::new("b.png", "image/png"));

        let names: Vec<_> = inbox.drain().iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
        assert!(inbox.drain().is_empty());
    }

    #[test]
    fn test_send_after_inbox_dropped() {
        let (inbox, mut sender) = UploadInbox::new();
        drop(inbox);
        sender.on_upload(&FileHandle::new("a.png", "image/png"));
    }
}
