//! Cancellable scheduled task driving the progress simulation.
//!
//! There is no background thread. A [`ProgressTimer`] is only a deadline plus
//! the ticket of the session that scheduled it; the controller owns at most
//! one, applies it when polled past its deadline, and drops it on completion
//! or cancellation. A dropped timer cannot fire.

use std::time::{Duration, Instant};

/// Identifies the session a timer was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket(u64);

impl TimerTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What happens when the timer's deadline elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStage {
    /// Next deadline adds one progress step
    Ticking,
    /// Progress is at 100; next deadline hands the file off
    Settling,
}

/// Owned handle of the one live simulation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTimer {
    ticket: TimerTicket,
    stage: TimerStage,
    due: Instant,
}

impl ProgressTimer {
    /// Schedules the first progress tick `interval` after `now`.
    pub(crate) fn start(ticket: TimerTicket, now: Instant, interval: Duration) -> Self {
        Self {
            ticket,
            stage: TimerStage::Ticking,
            due: now + interval,
        }
    }

    pub fn ticket(&self) -> TimerTicket {
        self.ticket
    }

    pub fn stage(&self) -> TimerStage {
        self.stage
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Time left until the deadline, zero if already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }

    /// Schedules the next tick relative to the previous deadline.
    ///
    /// Deadlines chain from each other rather than from the poll time, so a
    /// late poll does not stretch the whole sequence.
    pub(crate) fn next_tick(&mut self, interval: Duration) {
        self.due += interval;
    }

    /// Switches to the settle stage.
    pub(crate) fn settle(&mut self, delay: Duration) {
        self.stage = TimerStage::Settling;
        self.due += delay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadlines_chain() {
        let start = Instant::now();
        let interval = Duration::from_millis(200);
        let mut timer = ProgressTimer::start(TimerTicket::new(3), start, interval);

        assert_eq!(timer.stage(), TimerStage::Ticking);
        assert!(!timer.is_due(start));
        assert!(timer.is_due(start + interval));

        timer.next_tick(interval);
        assert_eq!(timer.due(), start + interval * 2);

        timer.settle(Duration::from_millis(450));
        assert_eq!(timer.stage(), TimerStage::Settling);
        assert_eq!(timer.due(), start + Duration::from_millis(850));
        assert_eq!(timer.ticket().generation(), 3);
    }

    #[test]
    fn test_remaining_saturates() {
        let start = Instant::now();
        let timer = ProgressTimer::start(TimerTicket::new(0), start, Duration::from_millis(100));
        assert_eq!(timer.remaining(start), Duration::from_millis(100));
        assert_eq!(timer.remaining(start + Duration::from_secs(5)), Duration::ZERO);
    }
}
