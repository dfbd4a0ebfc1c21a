#![allow(dead_code)]

use life_harness::{Engine, EngineError, LineSegment, PixelRect, Rgb, Surface};

/// Engine double that counts calls and can be told to misbehave.
pub struct ScriptedEngine {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<u8>,
    pub ticks: usize,
    pub toggles: Vec<(u32, u32)>,
    pub fail_next_tick: bool,
    /// Bytes dropped from the buffer on the next tick, simulating a bad reallocation.
    pub shrink_on_tick: usize,
}

impl ScriptedEngine {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; (width * height) as usize],
            ticks: 0,
            toggles: Vec::new(),
            fail_next_tick: false,
            shrink_on_tick: 0,
        }
    }
}

impl Engine for ScriptedEngine {
    fn tick(&mut self) -> Result<(), EngineError> {
        self.ticks += 1;
        if std::mem::take(&mut self.fail_next_tick) {
            return Err(EngineError::new("scripted failure"));
        }
        // a fresh allocation every step, like a real engine may do
        let mut next = self.cells.clone();
        let keep = next.len().saturating_sub(std::mem::take(&mut self.shrink_on_tick));
        next.truncate(keep);
        self.cells = next;
        Ok(())
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_dimensions(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        self.width = width;
        self.height = height;
        self.cells = vec![0; (width * height) as usize];
        Ok(())
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        self.toggles.push((row, col));
        let idx = (row * self.width + col) as usize;
        self.cells[idx] ^= 1;
    }

    fn randomize(&mut self) {
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            *cell = (idx % 3 == 0) as u8;
        }
    }

    fn reset(&mut self) {
        self.cells.fill(0);
    }
}

/// Surface that remembers what it was asked to draw.
#[derive(Default)]
pub struct RecordingSurface {
    pub stroke_batches: Vec<usize>,
    pub fills: Vec<(PixelRect, Rgb)>,
}

impl RecordingSurface {
    pub fn draw_calls(&self) -> usize {
        self.stroke_batches.len() + self.fills.len()
    }
}

impl Surface for RecordingSurface {
    fn stroke_lines(&mut self, lines: &[LineSegment], _color: Rgb) {
        self.stroke_batches.push(lines.len());
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.fills.push((rect, color));
    }
}
