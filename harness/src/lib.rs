// lib.rs - Animation loop and shared-buffer rendering for a Game of Life engine
//
// The engine owns the cells; this crate only reads them, one frame at a time.

pub mod animation;
pub mod buffer_view;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pointer;
pub mod render;
pub mod scheduler;
pub mod stats;
pub mod surface;

pub use animation::{AnimationController, FrameOutcome, GenerationToken, LifecycleState};
pub use buffer_view::{CellState, GridSnapshot};
pub use engine::{Engine, EngineError};
pub use error::{HarnessError, Result};
pub use grid::{CanvasSize, CellCoord, Dimensions};
pub use pointer::PointerMapper;
pub use render::{GridRenderer, RenderStyle};
pub use scheduler::{FrameQueue, FrameScheduler};
pub use stats::{FrameStatsSnapshot, FrameStatsTracker, FRAME_WINDOW};
pub use surface::{ColorParseError, LineSegment, PixelCanvas, PixelRect, Rgb, Surface};
