// buffer_view.rs - Read-only grid view over the engine's cell buffer

use std::fmt;

use crate::engine::Engine;
use crate::error::{HarnessError, Result};
use crate::grid::{CellCoord, Dimensions};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Dead = 0,
    Alive = 1,
}

impl CellState {
    /// Zero is Dead; any other byte counts as Alive.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        if byte == CellState::Dead as u8 {
            CellState::Dead
        } else {
            CellState::Alive
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// A point-in-time view of the grid.
///
/// Borrowing the buffer ties the snapshot to the step that produced it: the
/// engine cannot be ticked while a snapshot is alive.
#[derive(Debug, Clone, Copy)]
pub struct GridSnapshot<'a> {
    cells: &'a [u8],
    dims: Dimensions,
}

impl<'a> GridSnapshot<'a> {
    /// Validate `cells` against `width * height` and wrap it.
    pub fn acquire(cells: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let dims = Dimensions::new(width, height)?;
        let expected = dims.cell_count();
        if cells.len() != expected {
            return Err(HarnessError::BufferLengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { cells, dims })
    }

    pub fn from_engine<E: Engine + ?Sized>(engine: &'a E) -> Result<Self> {
        Self::acquire(engine.cells(), engine.width(), engine.height())
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        self.dims.index(row, col)
    }

    pub fn cell_at(&self, row: u32, col: u32) -> Result<CellState> {
        self.dims.check(CellCoord::new(row, col))?;
        Ok(CellState::from_byte(self.cells[self.index(row, col)]))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, CellState)> + 'a {
        let width = self.dims.width() as usize;
        let cells: &'a [u8] = self.cells;
        cells.iter().enumerate().map(move |(idx, &byte)| {
            let coord = CellCoord::new((idx / width) as u32, (idx % width) as u32);
            (coord, CellState::from_byte(byte))
        })
    }

    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&byte| CellState::from_byte(byte).is_alive())
            .count()
    }
}

impl fmt::Display for GridSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.dims.width() as usize) {
            for &byte in line {
                let symbol = if CellState::from_byte(byte).is_alive() { '◼' } else { '◻' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
