// Grid
pub const GRID_SIZE: usize = 10;
pub const MAX_GRID_SIZE: usize = 64;

// Initial snake: head at (1, 3) heading right, one body entry on (0, 3)
pub const INITIAL_HEAD_X: i32 = 1;
pub const INITIAL_HEAD_Y: i32 = 3;
pub const INITIAL_BODY: [usize; 1] = [30];

// Tick timing
pub const TICK_INTERVAL_MS: u64 = 400;
pub const MIN_TICK_INTERVAL_MS: u64 = 20;
pub const MAX_TICK_INTERVAL_MS: u64 = 5_000;
/// Upper bound on one input poll so quit/restart stay responsive.
pub const INPUT_POLL_CAP_MS: u64 = 50;

// Logging
pub const LOG_FILE_NAME: &str = "gridsnake.log";
pub const APP_DIR_NAME: &str = "gridsnake";
