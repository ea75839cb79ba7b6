//! Conway's Game of Life on an unbounded, sparse plane.

pub mod animate;
pub mod board;
pub mod cell;
pub mod enc;
pub mod engine;
pub mod error;
pub mod patterns;
pub mod render;
pub mod stats;

pub use animate::{Animator, Control, Frontend, Headless, Outcome};
pub use board::{Board, Bounds};
pub use cell::Cell;
pub use enc::{PatternCodec, RunLengthEncoded};
pub use engine::{Cycle, advance, advance_by, detect_cycle, neighbors, try_advance};
pub use error::{Error, Result};
pub use patterns::Pattern;
pub use render::Frame;
