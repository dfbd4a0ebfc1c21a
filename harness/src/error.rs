// error.rs - Failure kinds surfaced by the harness

use thiserror::Error;

use crate::engine::EngineError;

pub type Result<T, E = HarnessError> = std::result::Result<T, E>;

/// Errors raised while driving, reading or rendering the engine.
///
/// A stale frame callback is not listed here: it is reported as
/// [`FrameOutcome::Stale`](crate::FrameOutcome::Stale) and never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HarnessError {
    /// Engine-reported dimensions disagree with the buffer it exposes.
    #[error("cell buffer holds {actual} bytes but the grid needs {expected}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    IndexOutOfRange {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Two frame timestamps with no time between them.
    #[error("frame interval of {elapsed_ms} ms cannot produce a rate")]
    DegenerateInterval { elapsed_ms: f64 },

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl HarnessError {
    /// Whether the animation loop can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, HarnessError::DegenerateInterval { .. })
    }
}
