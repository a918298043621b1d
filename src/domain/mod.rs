mod board;
mod cell;
mod error;
mod pattern;
pub mod presets;

pub use board::Board;
pub use cell::Cell;
pub use error::LifeError;
pub use pattern::Pattern;
