// animation.rs - Play/pause state machine driving the engine once per frame
//
// Every Running period gets a fresh generation token. Callbacks carry the
// token they were scheduled with, so one that fires after `pause` sees a
// mismatch and returns without touching the engine or the surface.

use tracing::{debug, trace, warn};

use crate::buffer_view::GridSnapshot;
use crate::engine::Engine;
use crate::error::{HarnessError, Result};
use crate::grid::{CanvasSize, CellCoord, Dimensions};
use crate::pointer::PointerMapper;
use crate::render::GridRenderer;
use crate::scheduler::{FrameQueue, FrameScheduler};
use crate::stats::{FrameStatsSnapshot, FrameStatsTracker};
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Running,
}

/// Identifies one Running period of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GenerationToken(u64);

impl GenerationToken {
    fn next(self) -> Self {
        GenerationToken(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The engine stepped and the frame was drawn.
    Rendered,
    /// The callback belonged to a cancelled period and did nothing.
    Stale,
}

impl FrameOutcome {
    /// Whether the surface holds a new frame.
    pub fn is_rendered(self) -> bool {
        matches!(self, FrameOutcome::Rendered)
    }
}

/// Owns the engine handle, the lifecycle and everything drawn per frame.
pub struct AnimationController<E, S = FrameQueue> {
    engine: E,
    scheduler: S,
    renderer: GridRenderer,
    stats: FrameStatsTracker,
    state: LifecycleState,
    generation: GenerationToken,
}

impl<E: Engine, S: FrameScheduler> AnimationController<E, S> {
    pub fn new(engine: E, scheduler: S, renderer: GridRenderer) -> Self {
        Self {
            engine,
            scheduler,
            renderer,
            stats: FrameStatsTracker::new(),
            state: LifecycleState::Idle,
            generation: GenerationToken::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn generation(&self) -> GenerationToken {
        self.generation
    }

    /// Idle -> Running. Schedules the first frame of a new period.
    pub fn play(&mut self) {
        if self.is_running() {
            return;
        }
        self.generation = self.generation.next();
        self.state = LifecycleState::Running;
        // the gap spent paused is not a frame interval
        self.stats.reset_clock();
        debug!(generation = self.generation.value(), "animation playing");
        self.scheduler.request_frame(self.generation);
    }

    /// Running -> Idle. Any callback already queued becomes stale.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.generation = self.generation.next();
        self.state = LifecycleState::Idle;
        debug!(generation = self.generation.value(), "animation paused");
    }

    /// Host frame callback.
    ///
    /// Steps the engine, re-acquires the buffer, records the frame time,
    /// draws, and asks for the next frame. A failing step or acquisition
    /// pauses the loop and is returned; nothing is drawn for that frame.
    pub fn on_frame(
        &mut self,
        token: GenerationToken,
        timestamp_ms: f64,
        surface: &mut dyn Surface,
    ) -> Result<FrameOutcome> {
        if !self.is_running() || token != self.generation {
            trace!(
                token = token.value(),
                current = self.generation.value(),
                "dropping stale frame callback"
            );
            return Ok(FrameOutcome::Stale);
        }

        if let Err(err) = self.engine.tick() {
            return Err(self.halt(err.into()));
        }

        let snapshot = match GridSnapshot::from_engine(&self.engine) {
            Ok(snapshot) => snapshot,
            Err(err) => return Err(self.halt(err)),
        };

        if let Err(err) = self.stats.record(timestamp_ms) {
            trace!(%err, "skipping frame-rate sample");
        }

        self.renderer.draw_frame(surface, &snapshot);

        if self.is_running() {
            self.scheduler.request_frame(token);
        }
        Ok(FrameOutcome::Rendered)
    }

    /// Redraw the current engine state without stepping it.
    pub fn refresh(&mut self, surface: &mut dyn Surface) -> Result<()> {
        let snapshot = match GridSnapshot::from_engine(&self.engine) {
            Ok(snapshot) => snapshot,
            Err(err) => return Err(self.halt(err)),
        };
        self.renderer.draw_frame(surface, &snapshot);
        Ok(())
    }

    /// Toggle the cell under a pointer position and redraw.
    pub fn toggle_at(
        &mut self,
        pixel_x: f32,
        pixel_y: f32,
        surface: &mut dyn Surface,
    ) -> Result<CellCoord> {
        let dims = self.dimensions()?;
        let coord = PointerMapper::map(pixel_x, pixel_y, self.renderer.cell_size(), dims);
        debug!(row = coord.row, col = coord.col, "toggling cell");
        self.engine.toggle_cell(coord.row, coord.col);
        self.refresh(surface)?;
        Ok(coord)
    }

    pub fn randomize(&mut self, surface: &mut dyn Surface) -> Result<()> {
        self.engine.randomize();
        self.refresh(surface)
    }

    pub fn reset(&mut self, surface: &mut dyn Surface) -> Result<()> {
        self.engine.reset();
        self.refresh(surface)
    }

    /// Resize the grid. Invalid sizes are rejected before the loop is paused.
    pub fn set_dimensions(&mut self, width: u32, height: u32) -> Result<Dimensions> {
        let dims = Dimensions::new(width, height)?;
        self.pause();
        self.engine.set_dimensions(width, height)?;
        debug!(width, height, "grid resized");
        Ok(dims)
    }

    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.engine.width(), self.engine.height())
    }

    pub fn canvas_size(&self) -> Result<CanvasSize> {
        self.renderer.canvas_size(self.dimensions()?)
    }

    pub fn stats(&self) -> FrameStatsSnapshot {
        self.stats.snapshot()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn renderer(&self) -> &GridRenderer {
        &self.renderer
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn halt(&mut self, err: HarnessError) -> HarnessError {
        warn!(%err, "frame aborted, pausing animation");
        self.pause();
        err
    }
}
