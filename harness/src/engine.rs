// engine.rs - The simulation engine as seen from the harness

use thiserror::Error;

/// Failure reported by an engine implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("engine failure: {message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Opaque cellular-automaton engine.
///
/// The engine owns the cell buffer and may reallocate it on any `&mut self`
/// call. `cells()` borrows it, so a view built from that slice cannot be
/// held across the next `tick`, `set_dimensions`, `reset` or `randomize`.
pub trait Engine {
    /// Advance exactly one generation.
    fn tick(&mut self) -> Result<(), EngineError>;

    /// Current cell states, one byte per cell, row-major.
    fn cells(&self) -> &[u8];

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Resize the grid. Cell contents afterwards are engine-defined.
    fn set_dimensions(&mut self, width: u32, height: u32) -> Result<(), EngineError>;

    /// Flip one cell. Caller guarantees `row < height` and `col < width`.
    fn toggle_cell(&mut self, row: u32, col: u32);

    fn randomize(&mut self);

    /// Every cell Dead.
    fn reset(&mut self);
}
