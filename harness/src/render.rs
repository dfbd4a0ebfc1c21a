// render.rs - Draws grid lines and cell blocks onto a surface

use crate::buffer_view::{CellState, GridSnapshot};
use crate::error::Result;
use crate::grid::{CanvasSize, DEFAULT_CELL_SIZE, Dimensions};
use crate::surface::{LineSegment, PixelRect, Rgb, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub cell_size: u32,
    pub grid_color: Rgb,
    pub dead_color: Rgb,
    pub alive_color: Rgb,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            grid_color: Rgb::gray(0xCC),
            dead_color: Rgb::WHITE,
            alive_color: Rgb::BLACK,
        }
    }
}

impl RenderStyle {
    pub fn color_for(&self, state: CellState) -> Rgb {
        match state {
            CellState::Alive => self.alive_color,
            CellState::Dead => self.dead_color,
        }
    }
}

/// Stateless painter for one grid frame. Touches the surface only.
#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    style: RenderStyle,
}

impl GridRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn cell_size(&self) -> u32 {
        self.style.cell_size
    }

    // Pixel offset of the separator before cell `i`, widened so no grid overflows.
    #[inline]
    fn offset(&self, i: u32) -> u64 {
        i as u64 * (self.style.cell_size as u64 + 1) + 1
    }

    /// Fails with `InvalidDimensions` when the canvas would not fit in `u32` pixels.
    pub fn canvas_size(&self, dims: Dimensions) -> Result<CanvasSize> {
        CanvasSize::for_grid(self.style.cell_size, dims)
    }

    /// All separator lines, submitted to the surface as a single path.
    pub fn draw_grid(&self, surface: &mut dyn Surface, dims: Dimensions) {
        let canvas_w = self.offset(dims.width()) as f32;
        let canvas_h = self.offset(dims.height()) as f32;

        let vertical = (0..=dims.width()).map(|i| {
            let x = self.offset(i) as f32;
            LineSegment::new((x, 0.0), (x, canvas_h))
        });
        let horizontal = (0..=dims.height()).map(|i| {
            let y = self.offset(i) as f32;
            LineSegment::new((0.0, y), (canvas_w, y))
        });
        let path: Vec<LineSegment> = vertical.chain(horizontal).collect();

        surface.stroke_lines(&path, self.style.grid_color);
    }

    /// One `cell_size` square per cell: columns run along x, rows along y.
    pub fn draw_cells(&self, surface: &mut dyn Surface, snapshot: &GridSnapshot<'_>) {
        let size = self.style.cell_size;
        for (coord, state) in snapshot.cells() {
            let block = PixelRect {
                x: clamp_pixel(self.offset(coord.col)),
                y: clamp_pixel(self.offset(coord.row)),
                width: size,
                height: size,
            };
            surface.fill_rect(block, self.style.color_for(state));
        }
    }

    pub fn draw_frame(&self, surface: &mut dyn Surface, snapshot: &GridSnapshot<'_>) {
        self.draw_grid(surface, snapshot.dimensions());
        self.draw_cells(surface, snapshot);
    }
}

// Blocks past u32 pixels are off any surface anyway.
fn clamp_pixel(offset: u64) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
