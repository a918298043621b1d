use macroquad::prelude::*;

use crate::application::{Simulation, StopSignal};
use crate::domain::{Board, Cell, LifeError};

/// Height reserved at the top of the window for the HUD text
pub const HUD_HEIGHT: f32 = 32.0;

/// A renderer consumes a board snapshot and displays one frame,
/// replacing the previous one. The simulation loop only sees this
/// trait, so it runs the same against a window or a test recorder.
pub trait Renderer {
    fn frame(&mut self, board: &Board) -> Result<(), LifeError>;
}

/// Draws the board to the macroquad window as a two-color image:
/// live cells white on a black background, scaled to fit.
#[derive(Default)]
pub struct ScreenRenderer;

impl ScreenRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for ScreenRenderer {
    fn frame(&mut self, board: &Board) -> Result<(), LifeError> {
        clear_background(BLACK);
        draw_board(board);
        Ok(())
    }
}

/// Pixel size of one cell for the current window
fn cell_px(board: &Board) -> f32 {
    let area = screen_width().min(screen_height() - HUD_HEIGHT);
    area / board.size() as f32
}

/// Draw all live cells as filled rectangles below the HUD strip
pub fn draw_board(board: &Board) {
    let px = cell_px(board);

    for (row, col, cell) in board.iter_cells() {
        if cell.is_alive() {
            draw_rectangle(col as f32 * px, HUD_HEIGHT + row as f32 * px, px, px, WHITE);
        }
    }
}

/// Draw the generation/population readout and key hints
pub fn draw_hud(sim: &Simulation) {
    let status = if sim.is_running { "running" } else { "paused" };
    let line = format!(
        "gen {}  pop {}  {:.0}/s  [{}]   space: pause  r: random  c: clear  esc: quit",
        sim.generation,
        sim.board.population(),
        sim.updates_per_second,
        status,
    );
    draw_text(&line, 8.0, 22.0, 20.0, GRAY);
}

/// Headless renderer for tests: keeps a snapshot per frame and trips
/// the stop signal once the frame budget is reached.
pub struct RecordingRenderer {
    frames: Vec<Vec<Cell>>,
    max_frames: usize,
    stop: StopSignal,
}

impl RecordingRenderer {
    pub fn new(max_frames: usize, stop: StopSignal) -> Self {
        Self {
            frames: Vec::new(),
            max_frames,
            stop,
        }
    }

    /// Snapshots recorded so far, one per rendered generation
    pub fn frames(&self) -> &[Vec<Cell>] {
        &self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn frame(&mut self, board: &Board) -> Result<(), LifeError> {
        self.frames.push(board.snapshot());
        if self.frames.len() >= self.max_frames {
            self.stop.set();
        }
        Ok(())
    }
}
