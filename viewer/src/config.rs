// config.rs - Command-line configuration for the viewer

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use life_harness::grid::{DEFAULT_CELL_SIZE, DEFAULT_WIDTH};
use life_harness::{Engine, RenderStyle, Rgb};
use universe::{Universe, patterns};

#[derive(Debug, Clone, Parser)]
#[command(name = "conway_viewer", about = "Animated Game of Life on a shared cell buffer")]
pub struct ViewerConfig {
    /// Cells per side of the (square) grid
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..=1024))]
    pub size: u32,

    /// Cell edge in pixels, excluding the separator line
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub cell_size: u32,

    /// Seed for the randomize control
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting pattern by name; random cells when omitted
    #[arg(long)]
    pub pattern: Option<String>,

    #[arg(long, default_value = "#CCCCCC")]
    pub grid_color: Rgb,

    #[arg(long, default_value = "#FFFFFF")]
    pub dead_color: Rgb,

    #[arg(long, default_value = "#000000")]
    pub alive_color: Rgb,

    /// Run this many frames without a window and print the result
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u32>,
}

impl ViewerConfig {
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            cell_size: self.cell_size,
            grid_color: self.grid_color,
            dead_color: self.dead_color,
            alive_color: self.alive_color,
        }
    }

    /// Universe seeded with the requested pattern, or random cells.
    pub fn build_universe(&self) -> Result<Universe> {
        let mut universe = match self.seed {
            Some(seed) => Universe::with_seed(self.size, self.size, seed),
            None => Universe::new(self.size, self.size),
        }
        .context("creating universe")?;

        match self.pattern.as_deref() {
            Some(name) => {
                let pattern = patterns::find(name).ok_or_else(|| anyhow!("unknown pattern `{name}`"))?;
                universe.apply_pattern(pattern);
            }
            None => universe.randomize(),
        }
        Ok(universe)
    }
}
