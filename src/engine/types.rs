//! Snake engine data structures and derived state.

use crate::config::EngineConfig;
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction. Up decreases y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Down => "Down",
        }
    }
}

/// A position on the grid. May lie outside the grid (that is a frameout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one cell away in `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Lifecycle of one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Running,
    /// Terminal. Only a fresh engine leaves this state.
    GameOver,
}

/// Main game state.
///
/// The body holds linear cell indices (`y * grid_size + x`), oldest segment
/// first. Its first element is dropped on the next forward move and its last
/// element is the cell the head occupied before the latest move.
#[derive(Debug, Clone)]
pub struct GameEngine {
    /// Side length of the square grid, fixed for the engine's lifetime.
    pub grid_size: usize,

    // Snake state
    pub head: Position,
    pub body: VecDeque<usize>,
    pub direction: Direction,

    // Fruit
    pub fruit_index: usize,

    // Timing
    /// Tick interval in milliseconds (cached from config).
    pub tick_interval_ms: u64,
    /// Total movement steps elapsed.
    pub tick_count: u64,
}

impl GameEngine {
    /// Create a new engine from a validated config.
    ///
    /// The fruit is drawn at random; if it lands on the initial head cell it
    /// is eaten straight away, exactly as it would be after a move.
    pub fn new<R: Rng>(config: &EngineConfig, rng: &mut R) -> Self {
        let mut engine = Self {
            grid_size: config.grid_size,
            head: config.initial_head,
            body: config.initial_body.iter().copied().collect(),
            direction: config.initial_direction,
            fruit_index: random_fruit_index(config.grid_size, rng),
            tick_interval_ms: config.tick_interval_ms,
            tick_count: 0,
        };

        engine.consume_fruit(rng);
        engine
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// True when the head lies outside the grid.
    pub fn is_frameout(&self) -> bool {
        let size = self.grid_size as i64;
        let (x, y) = (self.head.x as i64, self.head.y as i64);
        x < 0 || x >= size || y < 0 || y >= size
    }

    /// Linear index of the head, or `None` when it is outside the grid.
    pub fn head_index(&self) -> Option<usize> {
        if self.is_frameout() {
            return None;
        }
        Some(self.head.y as usize * self.grid_size + self.head.x as usize)
    }

    pub fn is_eating_fruit(&self) -> bool {
        self.head_index() == Some(self.fruit_index)
    }

    /// True when the head sits on a body segment.
    pub fn is_suicided(&self) -> bool {
        self.head_index()
            .is_some_and(|index| self.body.contains(&index))
    }

    pub fn is_game_over(&self) -> bool {
        self.is_frameout() || self.is_suicided()
    }

    pub fn status(&self) -> EngineStatus {
        if self.is_game_over() {
            EngineStatus::GameOver
        } else {
            EngineStatus::Running
        }
    }

    /// Snake length minus the initial zero-length entry.
    pub fn score(&self) -> usize {
        self.body.len().saturating_sub(1)
    }

    /// Read-only view for rendering and logging.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_size: self.grid_size,
            head_index: self.head_index(),
            body: self.body.iter().copied().collect(),
            fruit_index: self.fruit_index,
            direction: self.direction,
            is_game_over: self.is_game_over(),
            score: self.score(),
            tick_interval_ms: self.tick_interval_ms,
            tick_count: self.tick_count,
        }
    }
}

/// Point-in-time copy of everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub grid_size: usize,
    pub head_index: Option<usize>,
    pub body: Vec<usize>,
    pub fruit_index: usize,
    pub direction: Direction,
    pub is_game_over: bool,
    pub score: usize,
    pub tick_interval_ms: u64,
    pub tick_count: u64,
}

/// Draw a fruit cell uniformly over the whole grid.
///
/// Occupied cells are not excluded: the fruit may spawn under the snake.
pub fn random_fruit_index<R: Rng>(grid_size: usize, rng: &mut R) -> usize {
    let cells = grid_size * grid_size;
    if cells == 0 {
        return 0;
    }
    rng.gen_range(0..cells)
}
