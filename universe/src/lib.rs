// lib.rs - Toroidal Conway universe with row coroutines
//
// Each generation spawns one task per row on a current-thread tokio runtime.
// Tasks yield between cells, so rows are time-sliced cooperatively on the
// calling thread. The cell buffer is rebuilt every generation.

use std::sync::Arc;
use std::time::Instant;

use life_harness::{CellState, Dimensions, Engine, EngineError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, debug_span, warn};

pub mod patterns;

use patterns::Pattern;

const DEFAULT_SEED: u64 = 0x5EED_C0DE_6A4E_2024;

#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("failed to start the row runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error(transparent)]
    Grid(#[from] life_harness::HarnessError),
}

pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    generation: u64,
    rng: SmallRng,
    runtime: Runtime,
}

/// Next state of one row, computed against a frozen copy of the grid.
async fn process_row(row: u32, current: Arc<Vec<u8>>, width: u32, height: u32) -> (u32, Vec<u8>) {
    let mut next_row = Vec::with_capacity(width as usize);
    for col in 0..width {
        let neighbors = live_neighbor_count(&current, width, height, row, col);
        let alive = current[index(width, row, col)] != CellState::Dead as u8;

        let next_state = match (alive, neighbors) {
            (true, 2) | (true, 3) => CellState::Alive, // survival
            (false, 3) => CellState::Alive,            // birth
            _ => CellState::Dead,                      // death or stays dead
        };
        next_row.push(next_state as u8);

        tokio::task::yield_now().await;
    }
    (row, next_row)
}

#[inline]
fn index(width: u32, row: u32, col: u32) -> usize {
    row as usize * width as usize + col as usize
}

// Edges wrap around.
fn live_neighbor_count(cells: &[u8], width: u32, height: u32, row: u32, col: u32) -> u8 {
    let mut count = 0;
    for delta_row in [height - 1, 0, 1] {
        for delta_col in [width - 1, 0, 1] {
            if delta_row == 0 && delta_col == 0 {
                continue;
            }
            let neighbor_row = (row + delta_row) % height;
            let neighbor_col = (col + delta_col) % width;
            if cells[index(width, neighbor_row, neighbor_col)] != CellState::Dead as u8 {
                count += 1;
            }
        }
    }
    count
}

impl Universe {
    /// All-dead universe of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, UniverseError> {
        Self::with_seed(width, height, DEFAULT_SEED)
    }

    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self, UniverseError> {
        let dims = Dimensions::new(width, height)?;
        let runtime = Builder::new_current_thread().build()?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead as u8; dims.cell_count()],
            generation: 0,
            rng: SmallRng::seed_from_u64(seed),
            runtime,
        })
    }

    /// Generations computed since the last reset, randomize or resize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark cells alive; coordinates outside the grid are ignored.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) {
        for &(row, col) in cells {
            if row < self.height && col < self.width {
                let idx = index(self.width, row, col);
                self.cells[idx] = CellState::Alive as u8;
            }
        }
    }

    /// Clear the grid and place `pattern` in its centre, clipped to the grid.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.reset();
        let (rows, cols) = pattern.extent();
        let top = self.height.saturating_sub(rows) / 2;
        let left = self.width.saturating_sub(cols) / 2;
        let placed: Vec<(u32, u32)> = pattern
            .cells
            .iter()
            .map(|&(row, col)| (row + top, col + left))
            .collect();
        self.set_cells(&placed);
        debug!(pattern = pattern.name, "pattern applied");
    }

    pub fn live_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell != CellState::Dead as u8)
            .count()
    }
}

impl Engine for Universe {
    fn tick(&mut self) -> Result<(), EngineError> {
        let span = debug_span!(
            "universe_tick",
            generation = self.generation,
            width = self.width,
            height = self.height
        );
        let _entered = span.enter();
        let started = Instant::now();

        let (width, height) = (self.width, self.height);
        let current = Arc::new(std::mem::take(&mut self.cells));

        let next = self.runtime.block_on(async {
            // one coroutine per row, all in flight at once
            let handles: Vec<_> = (0..height)
                .map(|row| tokio::spawn(process_row(row, Arc::clone(&current), width, height)))
                .collect();

            let mut next = vec![CellState::Dead as u8; current.len()];
            for handle in handles {
                let (row, cells) = handle
                    .await
                    .map_err(|err| EngineError::new(format!("row task failed: {err}")))?;
                let start = index(width, row, 0);
                next[start..start + width as usize].copy_from_slice(&cells);
            }
            Ok::<_, EngineError>(next)
        });

        match next {
            Ok(next) => {
                self.cells = next;
                self.generation += 1;
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                debug!(elapsed_ms, "generation computed");
                Ok(())
            }
            Err(err) => {
                warn!(%err, generation = self.generation, "generation abandoned");
                self.cells = Arc::try_unwrap(current).unwrap_or_else(|shared| (*shared).clone());
                Err(err)
            }
        }
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
        let dims = Dimensions::new(width, height).map_err(|err| EngineError::new(err.to_string()))?;
        self.width = width;
        self.height = height;
        self.cells = vec![CellState::Dead as u8; dims.cell_count()];
        self.generation = 0;
        Ok(())
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        if row >= self.height || col >= self.width {
            warn!(row, col, "toggle outside the grid ignored");
            return;
        }
        let idx = index(self.width, row, col);
        self.cells[idx] = match CellState::from_byte(self.cells[idx]) {
            CellState::Dead => CellState::Alive as u8,
            CellState::Alive => CellState::Dead as u8,
        };
    }

    fn randomize(&mut self) {
        let rng = &mut self.rng;
        for cell in self.cells.iter_mut() {
            *cell = if rng.gen_bool(0.5) {
                CellState::Alive as u8
            } else {
                CellState::Dead as u8
            };
        }
        self.generation = 0;
    }

    fn reset(&mut self) {
        self.cells.fill(CellState::Dead as u8);
        self.generation = 0;
    }
}
