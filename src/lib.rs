//! Gridsnake - terminal snake game library.
//!
//! The engine is UI-agnostic; the binary wires it to crossterm and ratatui.

pub mod app;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod input;
pub mod logging;
pub mod tick_timer;
pub mod ui;

pub use app::App;
pub use config::{ConfigError, EngineConfig};
pub use engine::{AdvanceOutcome, Direction, EngineStatus, GameEngine, GameSnapshot, Position};
