// grid.rs - Grid geometry shared by the view, renderer and pointer mapping

use crate::error::{HarnessError, Result};

// Defaults match the classic 64x64 board with 8px cells
pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;
pub const DEFAULT_CELL_SIZE: u32 = 8;

/// Width and height of the grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Both sides must be positive and the cell count must be addressable.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let invalid = HarnessError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(invalid)?;
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Number of cells; cannot overflow, `new` checked it.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `(row, col)`.
    #[inline]
    pub fn index(self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn contains(self, coord: CellCoord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    pub fn check(self, coord: CellCoord) -> Result<()> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(HarnessError::IndexOutOfRange {
                row: coord.row,
                col: coord.col,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Pixel size of the drawing surface for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// One separator pixel before every cell plus a closing border.
    ///
    /// Fails with `InvalidDimensions` when either side does not fit in `u32`.
    pub fn for_grid(cell_size: u32, dims: Dimensions) -> Result<Self> {
        let side = |cells: u32| {
            cell_size
                .checked_add(1)
                .and_then(|pitch| pitch.checked_mul(cells))
                .and_then(|px| px.checked_add(1))
        };
        match (side(dims.width()), side(dims.height())) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(HarnessError::InvalidDimensions {
                width: dims.width(),
                height: dims.height(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_sides() {
        assert_eq!(
            Dimensions::new(0, 4),
            Err(HarnessError::InvalidDimensions { width: 0, height: 4 })
        );
        assert!(Dimensions::new(4, 0).is_err());
    }

    #[test]
    fn index_is_a_bijection_onto_the_buffer() {
        let dims = Dimensions::new(7, 5).unwrap();
        let mut seen = vec![false; dims.cell_count()];
        for row in 0..dims.height() {
            for col in 0..dims.width() {
                let idx = dims.index(row, col);
                assert!(idx < seen.len());
                assert!(!seen[idx], "index {idx} hit twice");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn canvas_matches_classic_board() {
        let size = CanvasSize::for_grid(8, Dimensions::default()).unwrap();
        assert_eq!(size, CanvasSize { width: 577, height: 577 });
    }

    #[test]
    fn canvas_too_large_for_u32_is_rejected() {
        let dims = Dimensions::new(1 << 20, 2).unwrap();
        assert_eq!(
            CanvasSize::for_grid(1 << 12, dims),
            Err(HarnessError::InvalidDimensions { width: 1 << 20, height: 2 })
        );
        assert!(CanvasSize::for_grid(u32::MAX, Dimensions::new(1, 1).unwrap()).is_err());
        assert_eq!(
            CanvasSize::for_grid(0, Dimensions::new(3, 1).unwrap()),
            Ok(CanvasSize { width: 4, height: 2 })
        );
    }

    #[test]
    fn check_reports_the_offending_cell() {
        let dims = Dimensions::new(4, 3).unwrap();
        assert!(dims.check(CellCoord::new(2, 3)).is_ok());
        assert_eq!(
            dims.check(CellCoord::new(3, 0)),
            Err(HarnessError::IndexOutOfRange { row: 3, col: 0, width: 4, height: 3 })
        );
    }
}
