//! Conway's Game of Life on a fixed size, non-wrapping board.

pub mod board;
pub mod coord;
pub mod error;
pub mod pattern;

pub use board::{Board, Glyphs, LifeBoard};
pub use coord::Coord;
pub use error::{BoardError, PatternError};
pub use pattern::{FillMode, Pattern};
