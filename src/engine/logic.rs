//! Snake engine logic: direction changes, movement, growth and collisions.

use super::types::*;
use rand::Rng;

/// What a single `advance` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The engine was already terminal; nothing changed.
    Halted,
    /// Normal move.
    Moved,
    /// Moved onto the fruit and grew by one segment.
    Ate,
    /// Moved out of the grid or into the body. The engine is now terminal.
    Died,
}

impl GameEngine {
    /// Change direction unless `requested` would reverse the snake onto its
    /// own neck. Returns true if the stored direction changed.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() || requested == self.direction {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Advance the game by one tick.
    ///
    /// The body drops its oldest cell and takes the cell the head is leaving,
    /// then the head moves. Fruit and collisions are evaluated at the new head
    /// position; a fatal move is not rolled back.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> AdvanceOutcome {
        if self.is_game_over() {
            return AdvanceOutcome::Halted;
        }
        // Not game over, so the head is inside the grid.
        let Some(previous_head) = self.head_index() else {
            return AdvanceOutcome::Halted;
        };

        self.tick_count += 1;

        self.body.pop_front();
        self.body.push_back(previous_head);
        self.head = self.head.step(self.direction);

        let ate = self.consume_fruit(rng);

        if self.is_game_over() {
            AdvanceOutcome::Died
        } else if ate {
            AdvanceOutcome::Ate
        } else {
            AdvanceOutcome::Moved
        }
    }

    /// If the head is on the fruit, grow and draw a new fruit.
    ///
    /// Growth duplicates the oldest segment, which cancels the next drop from
    /// the front and leaves the snake one cell longer.
    pub(crate) fn consume_fruit<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.is_eating_fruit() {
            return false;
        }
        if let Some(&oldest) = self.body.front() {
            self.body.push_front(oldest);
        }
        self.fruit_index = random_fruit_index(self.grid_size, rng);
        true
    }
}
