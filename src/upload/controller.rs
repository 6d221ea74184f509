//! Upload interaction controller.
//!
//! Owns the [`UploadSession`] and every transition of the upload dialog:
//! drag depth counting, file selection, the simulated progress sequence, and
//! the open/close lifecycle. It knows nothing about rendering; a presentation
//! layer reads its state and forwards user events into it.
//!
//! The controller is driven cooperatively. Operations mutate state
//! synchronously, and the progress simulation advances only when [`poll`] is
//! called, typically once per frame by the host.
//!
//! [`poll`]: UploadController::poll

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clock::SystemClock;
use crate::traits::{Clock, UploadHandler};
use crate::upload::timer::{ProgressTimer, TimerStage, TimerTicket};
use crate::upload::{FileHandle, UploadPhase, UploadSession, UploadTiming};

/// Drag event classification delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEventKind {
    Enter,
    Leave,
    Over,
    DropPending,
}

/// Outcome of [`UploadController::select_file`].
///
/// Informational only. Every variant except `Accepted` left the session
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The file is now the candidate
    Accepted,
    /// MIME type outside the accepted set
    UnsupportedType,
    /// An upload is running
    Busy,
    /// The dialog is closed
    Inactive,
}

/// Result of polling the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    /// No upload running
    Idle,
    /// Upload running at the given percentage
    InProgress(u8),
    /// Upload finished during this poll; the handler has received the file
    /// and the session is closed
    Completed(FileHandle),
}

/// Controller for the single-image upload dialog.
///
/// One controller serves one dialog. The timer handle lives next to the
/// session and is cleared on every reset, so a new session never observes a
/// tick scheduled by an earlier one.
pub struct UploadController<C: Clock = SystemClock> {
    session: UploadSession,
    /// The one live simulation step, if an upload is running
    timer: Option<ProgressTimer>,
    /// Bumped whenever a session starts or ends
    generation: u64,
    timing: UploadTiming,
    clock: C,
    handler: Box<dyn UploadHandler>,
}

impl UploadController<SystemClock> {
    /// Creates a controller on real time with default timing.
    pub fn new(handler: impl UploadHandler + 'static) -> Self {
        Self::with_clock(SystemClock, UploadTiming::default(), handler)
    }
}

impl<C: Clock> UploadController<C> {
    /// Creates a controller on the given clock and timing.
    ///
    /// # Arguments
    /// * `clock` - Time source for the progress simulation
    /// * `timing` - Simulation constants (sanitized before use)
    /// * `handler` - Receives the file of each completed upload
    pub fn with_clock(clock: C, timing: UploadTiming, handler: impl UploadHandler + 'static) -> Self {
        Self {
            session: UploadSession::new(),
            timer: None,
            generation: 0,
            timing: timing.sanitized(),
            clock,
            handler: Box::new(handler),
        }
    }

    // ===== Lifecycle =====

    /// Presents the dialog with a fresh session.
    ///
    /// No-op if the dialog is already open.
    pub fn open_modal(&mut self) {
        if self.session.is_open() {
            debug!("upload dialog already open");
            return;
        }

        self.timer = None;
        self.generation += 1;
        self.session.open();
        debug!(generation = self.generation, "upload dialog opened");
    }

    /// Resets the session and cancels any running upload.
    ///
    /// Safe to call at any time; a no-op when already closed.
    pub fn close_modal(&mut self) {
        if !self.session.is_open() && self.timer.is_none() {
            return;
        }

        if let Some(timer) = self.timer.take() {
            info!(
                generation = timer.ticket().generation(),
                progress = self.session.upload_progress(),
                "upload cancelled"
            );
        }

        self.session.reset();
        self.generation += 1;
        debug!("upload dialog closed");
    }

    // ===== Input =====

    /// Applies a drag event to the drag depth counter.
    ///
    /// Ignored while the dialog is closed.
    pub fn on_drag_event(&mut self, kind: DragEventKind) {
        if !self.session.is_open() {
            return;
        }

        match kind {
            DragEventKind::Enter => self.session.drag_enter(),
            DragEventKind::Leave => self.session.drag_leave(),
            DragEventKind::Over => {}
            DragEventKind::DropPending => self.session.drag_reset(),
        }
    }

    /// Offers a candidate file from the picker or a drop.
    ///
    /// An accepted file replaces any previous selection. Rejections leave the
    /// session untouched.
    pub fn select_file(&mut self, candidate: FileHandle) -> Selection {
        if !self.session.is_open() {
            return Selection::Inactive;
        }
        if self.session.is_uploading() {
            debug!(file = candidate.name(), "selection ignored during upload");
            return Selection::Busy;
        }
        if !candidate.is_accepted() {
            debug!(
                file = candidate.name(),
                mime = candidate.mime_type(),
                "unsupported file type"
            );
            return Selection::UnsupportedType;
        }

        debug!(file = candidate.name(), "file selected");
        self.session.select(candidate);
        Selection::Accepted
    }

    /// Starts the simulated upload of the selected file.
    ///
    /// No-op without a selected file or while an upload is already running.
    pub fn save(&mut self) {
        if self.session.is_uploading() {
            return;
        }
        let Some(file) = self.session.selected_file() else {
            debug!("save ignored: no file selected");
            return;
        };

        info!(file = file.name(), generation = self.generation, "upload started");
        self.session.begin_upload();
        self.timer = Some(ProgressTimer::start(
            TimerTicket::new(self.generation),
            self.clock.now(),
            self.timing.step_interval(),
        ));
    }

    // ===== Simulation =====

    /// Applies every simulation step that is due.
    ///
    /// Steps are applied in order even if the clock jumped past several
    /// deadlines. When the settle delay after the 100% tick elapses, the
    /// handler receives the file and the session closes.
    pub fn poll(&mut self) -> UploadStatus {
        let now = self.clock.now();

        loop {
            let Some(timer) = self.timer.as_mut() else {
                return UploadStatus::Idle;
            };

            if timer.ticket().generation() != self.generation {
                warn!(
                    stale = timer.ticket().generation(),
                    current = self.generation,
                    "dropping timer from a previous session"
                );
                self.timer = None;
                return UploadStatus::Idle;
            }

            if !timer.is_due(now) {
                return UploadStatus::InProgress(self.session.upload_progress());
            }

            match timer.stage() {
                TimerStage::Ticking => {
                    let progress = self.session.advance_progress(self.timing.step_percent);
                    if progress >= 100 {
                        timer.settle(self.timing.settle_delay());
                    } else {
                        timer.next_tick(self.timing.step_interval());
                    }
                }
                TimerStage::Settling => {
                    self.timer = None;
                    return self.finish();
                }
            }
        }
    }

    fn finish(&mut self) -> UploadStatus {
        let Some(file) = self.session.selected_file().cloned() else {
            // Selection is frozen while uploading, so this only happens if
            // the session was reset underneath a live timer.
            self.close_modal();
            return UploadStatus::Idle;
        };

        info!(file = file.name(), "upload completed");
        self.handler.on_upload(&file);
        self.close_modal();
        UploadStatus::Completed(file)
    }

    /// Time until the next simulation step, if an upload is running.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer
            .as_ref()
            .map(|timer| timer.remaining(self.clock.now()))
    }

    // ===== Configuration =====

    pub fn timing(&self) -> UploadTiming {
        self.timing
    }

    /// Replaces the simulation constants. A running upload keeps its current
    /// deadline and uses the new values from its next step on.
    pub fn set_timing(&mut self, timing: UploadTiming) {
        self.timing = timing.sanitized();
    }

    // ===== State Queries =====

    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    pub fn phase(&self) -> UploadPhase {
        self.session.phase()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn is_drag_active(&self) -> bool {
        self.session.is_drag_active()
    }

    pub fn drag_depth(&self) -> u32 {
        self.session.drag_depth()
    }

    pub fn selected_file(&self) -> Option<&FileHandle> {
        self.session.selected_file()
    }

    pub fn is_uploading(&self) -> bool {
        self.session.is_uploading()
    }

    pub fn upload_progress(&self) -> u8 {
        self.session.upload_progress()
    }

    /// Returns true while a simulation step is scheduled.
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }
}

impl<C: Clock> fmt::Debug for UploadController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadController")
            .field("session", &self.session)
            .field("timer", &self.timer)
            .field("generation", &self.generation)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn png(name: &str) -> FileHandle {
        FileHandle::new(name, "image/png")
    }

    fn controller() -> (UploadController<ManualClock>, ManualClock, Rc<RefCell<Vec<FileHandle>>>) {
        let clock = ManualClock::new();
        let uploads = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&uploads);
        let controller = UploadController::with_clock(
            clock.clone(),
            UploadTiming::default(),
            move |file: &FileHandle| sink.borrow_mut().push(file.clone()),
        );
        (controller, clock, uploads)
    }

    #[test]
    fn test_initially_closed() {
        let (controller, _, _) = controller();
        assert_eq!(controller.phase(), UploadPhase::Closed);
        assert!(!controller.has_pending_timer());
        assert_eq!(controller.next_deadline(), None);
    }

    #[test]
    fn test_drag_events_ignored_while_closed() {
        let (mut controller, _, _) = controller();
        controller.on_drag_event(DragEventKind::Enter);
        assert_eq!(controller.drag_depth(), 0);
        assert!(!controller.is_drag_active());
    }

    #[test]
    fn test_over_changes_nothing() {
        let (mut controller, _, _) = controller();
        controller.open_modal();
        controller.on_drag_event(DragEventKind::Enter);
        let before = controller.session().clone();
        controller.on_drag_event(DragEventKind::Over);
        assert_eq!(controller.session(), &before);
    }

    #[test]
    fn test_select_while_closed_is_inactive() {
        let (mut controller, _, _) = controller();
        assert_eq!(controller.select_file(png("a.png")), Selection::Inactive);
        assert!(controller.selected_file().is_none());
    }

    #[test]
    fn test_double_open_keeps_running_upload() {
        let (mut controller, clock, _) = controller();
        controller.open_modal();
        controller.select_file(png("a.png"));
        controller.save();
        clock.advance(Duration::from_millis(200));
        controller.poll();

        controller.open_modal();
        assert!(controller.is_uploading());
        assert_eq!(controller.upload_progress(), 10);
        assert!(controller.has_pending_timer());
    }

    #[test]
    fn test_double_save_does_not_restart() {
        let (mut controller, clock, _) = controller();
        controller.open_modal();
        controller.select_file(png("a.png"));
        controller.save();
        clock.advance(Duration::from_millis(400));
        assert_eq!(controller.poll(), UploadStatus::InProgress(20));

        controller.save();
        assert_eq!(controller.upload_progress(), 20);
    }

    #[test]
    fn test_next_deadline_tracks_clock() {
        let (mut controller, clock, _) = controller();
        controller.open_modal();
        controller.select_file(png("a.png"));
        controller.save();
        assert_eq!(controller.next_deadline(), Some(Duration::from_millis(200)));

        clock.advance(Duration::from_millis(150));
        assert_eq!(controller.next_deadline(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_late_poll_applies_all_due_steps() {
        let (mut controller, clock, uploads) = controller();
        controller.open_modal();
        controller.select_file(png("a.png"));
        controller.save();

        clock.advance(Duration::from_millis(1000));
        assert_eq!(controller.poll(), UploadStatus::InProgress(50));
        assert!(uploads.borrow().is_empty());

        clock.advance(Duration::from_secs(10));
        assert_eq!(controller.poll(), UploadStatus::Completed(png("a.png")));
        assert_eq!(uploads.borrow().len(), 1);
        assert_eq!(controller.phase(), UploadPhase::Closed);
    }

    #[test]
    fn test_settle_delay_holds_at_100() {
        let (mut controller, clock, uploads) = controller();
        controller.open_modal();
        controller.select_file(png("a.png"));
        controller.save();

        clock.advance(Duration::from_millis(2000));
        assert_eq!(controller.poll(), UploadStatus::InProgress(100));
        assert!(controller.is_open());

        clock.advance(Duration::from_millis(449));
        assert_eq!(controller.poll(), UploadStatus::InProgress(100));
        assert!(uploads.borrow().is_empty());

        clock.advance(Duration::from_millis(1));
        assert!(matches!(controller.poll(), UploadStatus::Completed(_)));
        assert_eq!(uploads.borrow().len(), 1);
    }

    #[test]
    fn test_uneven_step_clamps_to_100() {
        let (mut controller, clock, _) = controller();
        controller.set_timing(UploadTiming {
            step_percent: 30,
            ..UploadTiming::default()
        });
        controller.open_modal();
        controller.select_file(png("a.png"));
        controller.save();

        let mut seen = Vec::new();
        for _ in 0..4 {
            clock.advance(Duration::from_millis(200));
            controller.poll();
            seen.push(controller.upload_progress());
        }
        assert_eq!(seen, vec![30, 60, 90, 100]);
    }

    #[test]
    fn test_poll_without_upload_is_idle() {
        let (mut controller, clock, uploads) = controller();
        controller.open_modal();
        clock.advance(Duration::from_secs(5));
        assert_eq!(controller.poll(), UploadStatus::Idle);
        assert!(uploads.borrow().is_empty());
        assert!(controller.is_open());
    }
}
