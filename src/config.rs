//! Engine configuration and validation.

use crate::constants::*;
use crate::engine::{Direction, Position};
use thiserror::Error;

/// Everything needed to build a fresh engine. Restart reuses the same config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub grid_size: usize,
    pub tick_interval_ms: u64,
    pub initial_head: Position,
    /// Linear cell indices, oldest segment first.
    pub initial_body: Vec<usize>,
    pub initial_direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be between 1 and {max}, got {got}")]
    GridSize { got: usize, max: usize },
    #[error("tick interval must be between {min}ms and {max}ms, got {got}ms")]
    TickInterval { got: u64, min: u64, max: u64 },
    #[error("initial body must have at least one segment")]
    EmptyBody,
    #[error("initial body index {index} is outside a {grid_size}x{grid_size} grid")]
    BodyOutOfGrid { index: usize, grid_size: usize },
    #[error("initial head ({x}, {y}) is outside a {grid_size}x{grid_size} grid")]
    HeadOutOfGrid { x: i32, y: i32, grid_size: usize },
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            initial_head: Position::new(INITIAL_HEAD_X, INITIAL_HEAD_Y),
            initial_body: INITIAL_BODY.to_vec(),
            initial_direction: Direction::Right,
        }
    }
}

impl EngineConfig {
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize {
                got: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }

        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::TickInterval {
                got: self.tick_interval_ms,
                min: MIN_TICK_INTERVAL_MS,
                max: MAX_TICK_INTERVAL_MS,
            });
        }

        if self.initial_body.is_empty() {
            return Err(ConfigError::EmptyBody);
        }

        let cells = self.grid_size * self.grid_size;
        if let Some(&index) = self.initial_body.iter().find(|&&index| index >= cells) {
            return Err(ConfigError::BodyOutOfGrid {
                index,
                grid_size: self.grid_size,
            });
        }

        let size = self.grid_size as i32;
        let Position { x, y } = self.initial_head;
        if x < 0 || x >= size || y < 0 || y >= size {
            return Err(ConfigError::HeadOutOfGrid {
                x,
                y,
                grid_size: self.grid_size,
            });
        }

        Ok(())
    }
}
