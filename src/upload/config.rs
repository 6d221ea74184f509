//! Timing of the simulated upload.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Constants of the progress simulation.
///
/// Stored as plain milliseconds so the value round-trips through the JSON
/// settings store unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadTiming {
    /// Delay between progress ticks
    pub step_interval_ms: u64,
    /// Percentage points added per tick
    pub step_percent: u8,
    /// Pause at 100% before handing the file off
    pub settle_delay_ms: u64,
}

impl Default for UploadTiming {
    fn default() -> Self {
        Self {
            step_interval_ms: 200,
            step_percent: 10,
            settle_delay_ms: 450,
        }
    }
}

impl UploadTiming {
    /// Returns a copy safe to drive the simulation with.
    ///
    /// A zero step would never reach 100%, so the step is clamped to 1..=100.
    pub fn sanitized(self) -> Self {
        Self {
            step_percent: self.step_percent.clamp(1, 100),
            ..self
        }
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Number of ticks needed to go from 0 to 100.
    pub fn ticks_to_complete(&self) -> u32 {
        let step = u32::from(self.step_percent.clamp(1, 100));
        100u32.div_ceil(step)
    }
}
