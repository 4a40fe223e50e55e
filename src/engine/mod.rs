//! Snake game-state engine.
//!
//! A snake moves one cell per tick on a square grid, grows when its head lands
//! on the fruit, and the game ends when the head leaves the grid or runs into
//! the body. Rendering, key handling and scheduling live outside this module.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
