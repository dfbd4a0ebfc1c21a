// app.rs - egui front end: controls, FPS readout and the grid texture
//
// The harness draws into a CPU canvas; egui only shows that canvas as a
// texture. A failed frame leaves the canvas as it was, so the last good
// frame stays on screen.

use std::time::Instant;

use egui::{Color32, Rect, Sense, TextureHandle, TextureOptions, Vec2, pos2};
use life_harness::{AnimationController, Engine, FrameQueue, GridRenderer, HarnessError, PixelCanvas};
use tracing::warn;
use universe::{Universe, patterns};

use crate::config::ViewerConfig;

pub struct ConwayViewer {
    controller: AnimationController<Universe, FrameQueue>,
    canvas: PixelCanvas,
    texture: Option<TextureHandle>,
    canvas_dirty: bool,
    clock: Instant,
    selected_pattern: usize,
    requested_size: u32,
    last_error: Option<String>,
}

impl ConwayViewer {
    pub fn new(config: &ViewerConfig) -> anyhow::Result<Self> {
        let universe = config.build_universe()?;
        let style = config.render_style();
        let mut controller =
            AnimationController::new(universe, FrameQueue::new(), GridRenderer::new(style));
        let mut canvas = PixelCanvas::new(controller.canvas_size()?, style.dead_color);
        controller.refresh(&mut canvas)?;

        Ok(Self {
            controller,
            canvas,
            texture: None,
            canvas_dirty: true,
            clock: Instant::now(),
            selected_pattern: 0,
            requested_size: config.size,
            last_error: None,
        })
    }

    pub fn window_size(&self) -> [f32; 2] {
        [
            (self.canvas.width() + 40).max(640) as f32,
            (self.canvas.height() + 260) as f32,
        ]
    }

    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    /// Deliver the frame callbacks requested since the last repaint.
    fn run_pending_frames(&mut self) {
        let pending = self.controller.scheduler_mut().drain();
        for token in pending {
            let now = self.now_ms();
            match self.controller.on_frame(token, now, &mut self.canvas) {
                Ok(outcome) if outcome.is_rendered() => self.canvas_dirty = true,
                Ok(_) => {}
                Err(err) => self.report(err),
            }
        }
    }

    fn report(&mut self, err: HarnessError) {
        warn!(%err, "viewer action failed");
        self.last_error = Some(err.to_string());
    }

    fn redraw_after(&mut self, result: Result<(), HarnessError>) {
        match result {
            Ok(()) => {
                self.canvas_dirty = true;
                self.last_error = None;
            }
            Err(err) => self.report(err),
        }
    }

    fn resize(&mut self, size: u32) {
        let resized = self.controller.set_dimensions(size, size).and_then(|_| {
            let background = self.controller.renderer().style().dead_color;
            self.canvas = PixelCanvas::new(self.controller.canvas_size()?, background);
            self.controller.refresh(&mut self.canvas)
        });
        self.redraw_after(resized);
    }

    fn upload_canvas(&mut self, ctx: &egui::Context) {
        if !self.canvas_dirty {
            return;
        }
        let size = [self.canvas.width() as usize, self.canvas.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, &self.canvas.to_rgba());
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => self.texture = Some(ctx.load_texture("life-grid", image, TextureOptions::NEAREST)),
        }
        self.canvas_dirty = false;
    }
}

impl eframe::App for ConwayViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_pending_frames();
        self.upload_canvas(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() { "⏸ Pause" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    if self.controller.is_running() {
                        self.controller.pause();
                    } else {
                        self.last_error = None;
                        self.controller.play();
                    }
                }

                if ui.button("🎲 Random").clicked() {
                    self.controller.pause();
                    let result = self.controller.randomize(&mut self.canvas);
                    self.redraw_after(result);
                }

                if ui.button("⏹ Reset").clicked() {
                    self.controller.pause();
                    let result = self.controller.reset(&mut self.canvas);
                    self.redraw_after(result);
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.controller.pause();
                    let pattern = &patterns::PATTERNS[self.selected_pattern];
                    self.controller.engine_mut().apply_pattern(pattern);
                    let result = self.controller.refresh(&mut self.canvas);
                    self.redraw_after(result);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Size:");
                ui.add(egui::DragValue::new(&mut self.requested_size).clamp_range(4..=256));
                if ui.button("Resize").clicked() {
                    self.resize(self.requested_size);
                }

                ui.separator();

                let engine = self.controller.engine();
                ui.label(format!("Generation: {}", engine.generation()));
                ui.label(format!(
                    "Live cells: {} / {}",
                    engine.live_cells(),
                    engine.cells().len()
                ));
            });

            ui.separator();
            ui.monospace(self.controller.stats().to_string());
            if let Some(err) = &self.last_error {
                ui.colored_label(Color32::from_rgb(200, 40, 40), err.as_str());
            }
            ui.separator();

            let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
            let (response, painter) = ui.allocate_painter(size, Sense::click());
            if let Some(texture) = &self.texture {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(texture.id(), response.rect, uv, Color32::WHITE);
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - response.rect.min;
                    let result = self
                        .controller
                        .toggle_at(local.x, local.y, &mut self.canvas)
                        .map(|_| ());
                    self.redraw_after(result);
                }
            }
        });

        // Keep frames coming while the loop wants them
        if !self.controller.scheduler_mut().is_empty() || self.canvas_dirty {
            ctx.request_repaint();
        }
    }
}
