//! Application state: owns the engine and is its only writer.
//!
//! The terminal loop feeds key inputs and the clock in; the renderer reads
//! snapshots out.

use crate::config::EngineConfig;
use crate::constants::INPUT_POLL_CAP_MS;
use crate::engine::{AdvanceOutcome, GameEngine};
use crate::input::GameInput;
use crate::tick_timer::TickTimer;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

pub struct App {
    config: EngineConfig,
    engine: GameEngine,
    rng: StdRng,
    timer: TickTimer,
    /// Number of engines created so far, including the first.
    games_played: u32,
    pub should_quit: bool,
}

impl App {
    /// Create an app seeded from OS entropy. `config` must already be validated.
    pub fn new(config: EngineConfig, now: Instant) -> Self {
        Self::with_rng(config, StdRng::from_entropy(), now)
    }

    pub fn with_rng(config: EngineConfig, mut rng: StdRng, now: Instant) -> Self {
        let engine = GameEngine::new(&config, &mut rng);
        let timer = TickTimer::new(Duration::from_millis(config.tick_interval_ms), now);
        info!(
            "Game 1 started: {}x{} grid, fruit at {}",
            engine.grid_size, engine.grid_size, engine.fruit_index
        );

        Self {
            config,
            engine,
            rng,
            timer,
            games_played: 1,
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Apply one input. Direction changes become visible to the next tick.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        match input {
            GameInput::Turn(direction) => {
                if self.engine.set_direction(direction) {
                    debug!("Direction -> {}", direction.name());
                }
            }
            GameInput::Restart => {
                if self.engine.is_game_over() {
                    self.restart(now);
                }
            }
            GameInput::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            GameInput::Other => {}
        }
    }

    /// Run a tick if one is due. Returns true if the engine changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }

        match self.engine.advance(&mut self.rng) {
            AdvanceOutcome::Halted => {
                self.timer.disarm();
                false
            }
            AdvanceOutcome::Moved => true,
            AdvanceOutcome::Ate => {
                debug!(
                    "Fruit eaten, score {}, next fruit at {}",
                    self.engine.score(),
                    self.engine.fruit_index
                );
                true
            }
            AdvanceOutcome::Died => {
                self.timer.disarm();
                self.log_game_over();
                true
            }
        }
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let cap = Duration::from_millis(INPUT_POLL_CAP_MS);
        self.timer
            .time_until_due(now)
            .map_or(cap, |remaining| remaining.min(cap))
    }

    /// Throw the engine away and start over from the same config.
    pub fn restart(&mut self, now: Instant) {
        self.engine = GameEngine::new(&self.config, &mut self.rng);
        self.timer.rearm(now);
        self.games_played += 1;
        info!(
            "Game {} started, fruit at {}",
            self.games_played, self.engine.fruit_index
        );
    }

    fn log_game_over(&self) {
        let cause = if self.engine.is_frameout() {
            "left the grid"
        } else {
            "ran into itself"
        };
        info!(
            "Game {} over after {} ticks: snake {}, score {}",
            self.games_played,
            self.engine.tick_count,
            cause,
            self.engine.score()
        );
        match serde_json::to_string(&self.engine.snapshot()) {
            Ok(json) => info!("Final state: {json}"),
            Err(e) => warn!("Could not serialize final state: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, Position};
    use std::collections::VecDeque;

    const TICK: Duration = Duration::from_millis(400);

    fn test_app(start: Instant) -> App {
        let mut app = App::with_rng(EngineConfig::default(), StdRng::seed_from_u64(99), start);
        app.engine.body = VecDeque::from([30]);
        app.engine.fruit_index = 99;
        app
    }

    /// Drive the snake into the right wall: from (1,3) it needs 9 ticks.
    fn crash(app: &mut App, start: Instant) -> Instant {
        let mut now = start;
        for _ in 0..9 {
            now += TICK;
            app.on_tick(now);
        }
        now
    }

    #[test]
    fn test_no_tick_before_interval() {
        let start = Instant::now();
        let mut app = test_app(start);
        assert!(!app.on_tick(start + Duration::from_millis(100)));
        assert_eq!(app.engine().head, Position::new(1, 3));
    }

    #[test]
    fn test_tick_advances_engine() {
        let start = Instant::now();
        let mut app = test_app(start);
        assert!(app.on_tick(start + TICK));
        assert_eq!(app.engine().head, Position::new(2, 3));
        // Re-armed from the firing time
        assert!(!app.on_tick(start + TICK));
    }

    #[test]
    fn test_turn_applies_to_next_tick() {
        let start = Instant::now();
        let mut app = test_app(start);
        app.handle_input(GameInput::Turn(Direction::Down), start);
        app.on_tick(start + TICK);
        assert_eq!(app.engine().head, Position::new(1, 4));
    }

    #[test]
    fn test_reverse_turn_ignored() {
        let start = Instant::now();
        let mut app = test_app(start);
        app.handle_input(GameInput::Turn(Direction::Left), start);
        assert_eq!(app.engine().direction, Direction::Right);
    }

    #[test]
    fn test_game_over_stops_ticking() {
        let start = Instant::now();
        let mut app = test_app(start);
        let now = crash(&mut app, start);

        assert!(app.engine().is_game_over());
        assert!(!app.on_tick(now + TICK * 10));
        assert_eq!(app.engine().head, Position::new(10, 3));
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let start = Instant::now();
        let mut app = test_app(start);
        app.on_tick(start + TICK);

        app.handle_input(GameInput::Restart, start + TICK);

        assert_eq!(app.games_played(), 1);
        assert_eq!(app.engine().head, Position::new(2, 3));
    }

    #[test]
    fn test_restart_after_game_over() {
        let start = Instant::now();
        let mut app = test_app(start);
        let now = crash(&mut app, start);

        app.handle_input(GameInput::Restart, now);

        assert_eq!(app.games_played(), 2);
        assert!(!app.engine().is_game_over());
        assert_eq!(app.engine().head, Position::new(1, 3));
        assert_eq!(app.engine().direction, Direction::Right);
        assert_eq!(app.engine().tick_count, 0);
        assert!(app.on_tick(now + TICK));
    }

    #[test]
    fn test_quit_sets_flag() {
        let start = Instant::now();
        let mut app = test_app(start);
        assert!(!app.should_quit);
        app.handle_input(GameInput::Quit, start);
        assert!(app.should_quit);
    }

    #[test]
    fn test_other_input_changes_nothing() {
        let start = Instant::now();
        let mut app = test_app(start);
        app.handle_input(GameInput::Other, start);
        assert_eq!(app.engine().direction, Direction::Right);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_poll_timeout_capped() {
        let start = Instant::now();
        let app = test_app(start);
        assert_eq!(
            app.poll_timeout(start),
            Duration::from_millis(INPUT_POLL_CAP_MS)
        );
        assert_eq!(app.poll_timeout(start + TICK), Duration::ZERO);
    }

    #[test]
    fn test_poll_timeout_after_game_over() {
        let start = Instant::now();
        let mut app = test_app(start);
        let now = crash(&mut app, start);
        assert_eq!(
            app.poll_timeout(now),
            Duration::from_millis(INPUT_POLL_CAP_MS)
        );
    }
}
