// stats.rs - Sliding-window frame rate statistics

use std::collections::VecDeque;
use std::fmt;

use crate::error::{HarnessError, Result};

/// Number of samples kept in the window.
pub const FRAME_WINDOW: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStatsSnapshot {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl FrameStatsSnapshot {
    pub const EMPTY: FrameStatsSnapshot = FrameStatsSnapshot {
        latest: f64::NAN,
        mean: f64::NAN,
        min: f64::NAN,
        max: f64::NAN,
    };

    pub fn is_empty(&self) -> bool {
        self.latest.is_nan()
    }
}

impl fmt::Display for FrameStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames per Second:")?;
        writeln!(f, "         latest = {:.0}", self.latest)?;
        writeln!(f, "avg of last {FRAME_WINDOW} = {:.0}", self.mean)?;
        writeln!(f, "min of last {FRAME_WINDOW} = {:.0}", self.min)?;
        write!(f, "max of last {FRAME_WINDOW} = {:.0}", self.max)
    }
}

/// FIFO window of instantaneous frame rates (`1000 / elapsed_ms`).
#[derive(Debug, Clone, Default)]
pub struct FrameStatsTracker {
    samples: VecDeque<f64>,
    last_timestamp: Option<f64>,
}

impl FrameStatsTracker {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(FRAME_WINDOW + 1),
            last_timestamp: None,
        }
    }

    /// Record a frame at `timestamp_ms`.
    ///
    /// The first call has nothing to measure against and only stores the
    /// timestamp. A non-positive interval fails with `DegenerateInterval`
    /// and leaves the tracker untouched.
    pub fn record(&mut self, timestamp_ms: f64) -> Result<()> {
        let Some(previous) = self.last_timestamp else {
            self.last_timestamp = Some(timestamp_ms);
            return Ok(());
        };

        let elapsed_ms = timestamp_ms - previous;
        if !(elapsed_ms > 0.0) {
            return Err(HarnessError::DegenerateInterval { elapsed_ms });
        }

        self.last_timestamp = Some(timestamp_ms);
        self.push(1000.0 / elapsed_ms);
        Ok(())
    }

    fn push(&mut self, rate: f64) {
        self.samples.push_back(rate);
        if self.samples.len() > FRAME_WINDOW {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest first.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Recomputed from the live window on every call.
    pub fn snapshot(&self) -> FrameStatsSnapshot {
        let Some(&latest) = self.samples.back() else {
            return FrameStatsSnapshot::EMPTY;
        };

        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &rate in &self.samples {
            sum += rate;
            min = min.min(rate);
            max = max.max(rate);
        }

        FrameStatsSnapshot {
            latest,
            mean: sum / self.samples.len() as f64,
            min,
            max,
        }
    }

    /// Keep the window but treat the next `record` as a first call.
    pub fn reset_clock(&mut self) {
        self.last_timestamp = None;
    }
}
