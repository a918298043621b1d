// Domain layer - board, patterns, transition rule
pub mod domain;

// Application layer - simulation loop coordination
pub mod application;

// Infrastructure layer - rendering, input
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{Simulation, StopSignal};
pub use domain::{Board, Cell, LifeError, Pattern, presets};
pub use rendering::{RecordingRenderer, Renderer, ScreenRenderer};
