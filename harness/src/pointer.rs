// pointer.rs - Pixel to cell mapping for pointer input

use crate::grid::{CellCoord, Dimensions};

/// Stateless mapping from surface pixels to grid cells.
///
/// Follows the renderer's axis convention: x picks the column and is bounded
/// by the grid width, y picks the row and is bounded by the height.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerMapper;

impl PointerMapper {
    /// Always returns an addressable cell, border pixels included.
    pub fn map(pixel_x: f32, pixel_y: f32, cell_size: u32, dims: Dimensions) -> CellCoord {
        let pitch = cell_size as f32 + 1.0;
        CellCoord {
            row: clamp_cell(pixel_y / pitch, dims.height()),
            col: clamp_cell(pixel_x / pitch, dims.width()),
        }
    }
}

// NaN and negatives land on 0; the float to int cast saturates large values.
fn clamp_cell(position: f32, extent: u32) -> u32 {
    let cell = position.floor();
    if !(cell > 0.0) {
        return 0;
    }
    (cell as u32).min(extent - 1)
}
