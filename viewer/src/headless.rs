// headless.rs - Drive the animation loop without a window

use std::time::Instant;

use anyhow::Result;
use life_harness::{AnimationController, FrameQueue, GridRenderer, GridSnapshot, PixelCanvas};
use tracing::info;

use crate::config::ViewerConfig;

/// Runs `frames` callbacks back to back and prints the final grid and FPS.
pub fn run(config: &ViewerConfig, frames: u32) -> Result<()> {
    let universe = config.build_universe()?;
    let style = config.render_style();
    let mut controller =
        AnimationController::new(universe, FrameQueue::new(), GridRenderer::new(style));
    let mut canvas = PixelCanvas::new(controller.canvas_size()?, style.dead_color);
    let clock = Instant::now();

    controller.play();
    let mut rendered = 0;
    while rendered < frames {
        let Some(token) = controller.scheduler_mut().pop() else {
            break;
        };
        let now_ms = clock.elapsed().as_secs_f64() * 1000.0;
        controller.on_frame(token, now_ms, &mut canvas)?;
        rendered += 1;
    }
    controller.pause();

    let engine = controller.engine();
    info!(
        frames = rendered,
        generation = engine.generation(),
        live = engine.live_cells(),
        "headless run finished"
    );

    print!("{}", GridSnapshot::from_engine(engine)?);
    println!("{}", controller.stats());
    Ok(())
}
