//! Translation of per-frame drag snapshots into drag events.
//!
//! Immediate-mode toolkits report "files are hovering" and "files were
//! dropped" once per frame instead of delivering enter/leave events per
//! element. The tracker remembers the previous frame and emits the
//! equivalent [`DragEventKind`] sequence.

use crate::upload::DragEventKind;

/// Edge detector for drag-and-drop hover state.
#[derive(Debug, Clone, Default)]
pub struct DropZoneTracker {
    hovering: bool,
}

impl DropZoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if files were hovering on the last update.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Consumes one frame's snapshot.
    ///
    /// # Arguments
    /// * `hovering` - Files are currently dragged over the window
    /// * `dropped` - Files were released this frame
    ///
    /// # Returns
    /// Events to forward to the controller, in order.
    pub fn update(&mut self, hovering: bool, dropped: bool) -> Vec<DragEventKind> {
        let mut events = Vec::new();

        if dropped {
            // Some platforms report the drop without a hover frame first.
            events.push(DragEventKind::DropPending);
            self.hovering = false;
            return events;
        }

        match (self.hovering, hovering) {
            (false, true) => {
                events.push(DragEventKind::Enter);
                events.push(DragEventKind::Over);
            }
            (true, true) => events.push(DragEventKind::Over),
            (true, false) => events.push(DragEventKind::Leave),
            (false, false) => {}
        }

        self.hovering = hovering;
        events
    }

    /// Forgets any hover in progress.
    pub fn reset(&mut self) {
        self.hovering = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DragEventKind::*;

    #[test]
    fn test_hover_then_leave() {
        let mut tracker = DropZoneTracker::new();
        assert_eq!(tracker.update(true, false), vec![Enter, Over]);
        assert!(tracker.is_hovering());
        assert_eq!(tracker.update(true, false), vec![Over]);
        assert_eq!(tracker.update(false, false), vec![Leave]);
        assert!(!tracker.is_hovering());
        assert!(tracker.update(false, false).is_empty());
    }

    #[test]
    fn test_hover_then_drop() {
        let mut tracker = DropZoneTracker::new();
        tracker.update(true, false);
        assert_eq!(tracker.update(false, true), vec![DropPending]);
        assert!(!tracker.is_hovering());
        assert!(tracker.update(false, false).is_empty());
    }

    #[test]
    fn test_drop_without_hover() {
        let mut tracker = DropZoneTracker::new();
        assert_eq!(tracker.update(false, true), vec![DropPending]);
    }
}
