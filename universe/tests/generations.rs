use life_harness::{
    AnimationController, Engine, FrameOutcome, FrameQueue, GridRenderer, GridSnapshot,
    PixelCanvas, RenderStyle,
};
use universe::{Universe, patterns};

fn universe_with(width: u32, height: u32, cells: &[(u32, u32)]) -> Universe {
    let mut universe = Universe::new(width, height).expect("universe");
    universe.set_cells(cells);
    universe
}

#[test]
fn glider_advances_one_step() {
    let mut universe = universe_with(5, 5, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
    let expected = universe_with(5, 5, &[(1, 2), (3, 2), (2, 3), (3, 3), (2, 4)]);

    universe.tick().unwrap();

    assert_eq!(universe.cells(), expected.cells());
}

#[test]
fn blinker_has_period_two() {
    let mut universe = Universe::new(8, 8).unwrap();
    universe.apply_pattern(patterns::find("Blinker").unwrap());
    let start = universe.cells().to_vec();

    universe.tick().unwrap();
    assert_ne!(universe.cells(), &start[..]);
    universe.tick().unwrap();
    assert_eq!(universe.cells(), &start[..]);
    assert_eq!(universe.generation(), 2);
}

#[test]
fn pattern_is_centred_and_clipped() {
    let mut universe = Universe::new(9, 9).unwrap();
    universe.apply_pattern(patterns::find("Glider").unwrap());
    let snapshot = GridSnapshot::from_engine(&universe).unwrap();
    assert_eq!(snapshot.live_count(), 5);
    assert!(snapshot.cell_at(3, 4).unwrap().is_alive());

    let mut small = Universe::new(10, 4).unwrap();
    small.apply_pattern(patterns::find("Gosper Glider Gun").unwrap());
    assert!(small.live_cells() < 36);
}

#[test]
fn universe_runs_under_the_animation_loop() {
    let mut universe = Universe::with_seed(16, 16, 42).unwrap();
    universe.randomize();
    let renderer = GridRenderer::new(RenderStyle::default());
    let mut ctl = AnimationController::new(universe, FrameQueue::new(), renderer);
    let mut canvas = PixelCanvas::new(ctl.canvas_size().unwrap(), RenderStyle::default().dead_color);

    ctl.play();
    for frame in 0..10 {
        let token = ctl.scheduler_mut().pop().expect("loop keeps scheduling");
        let outcome = ctl.on_frame(token, frame as f64 * 16.0, &mut canvas).unwrap();
        assert_eq!(outcome, FrameOutcome::Rendered);
    }
    ctl.pause();

    assert_eq!(ctl.engine().generation(), 10);
    assert_eq!(ctl.stats().latest.round(), 63.0);
    let token = ctl.scheduler_mut().pop().unwrap();
    assert_eq!(ctl.on_frame(token, 200.0, &mut canvas).unwrap(), FrameOutcome::Stale);
    assert_eq!(ctl.engine().generation(), 10);
}
