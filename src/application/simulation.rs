use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::domain::{Board, LifeError};
use crate::rendering::Renderer;

/// Cloneable flag that tells a running simulation to stop.
/// Shared with whatever drives the loop (keyboard handler, test
/// harness, recording renderer).
#[derive(Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Simulation coordinates the board with the frame loop.
/// This is the application layer on top of the domain logic.
pub struct Simulation {
    pub board: Board,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Clear the board and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.board.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize the board and reset the generation counter
    pub fn randomize(mut self) -> Self {
        self.board.randomize();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Advance the simulation by one frame. Steps the board whenever
    /// the accumulated frame time crosses the update interval.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.board.step();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }

    /// Step-and-render loop: advance one generation, hand the board to
    /// the renderer, pause, repeat until the stop signal is set. A
    /// renderer error terminates the loop.
    pub fn run(
        &mut self,
        renderer: &mut dyn Renderer,
        stop: &StopSignal,
        frame_delay: Duration,
    ) -> Result<(), LifeError> {
        while !stop.is_set() {
            self.board.step();
            self.generation += 1;
            renderer.frame(&self.board)?;

            if !frame_delay.is_zero() {
                thread::sleep(frame_delay);
            }
        }
        Ok(())
    }
}
