use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, WallMode};
use crate::fruit::{self, Fruit};
use crate::input::Direction;
use crate::placement::place_random_cell;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// `GameOver` and `Victory` are terminal: `step` and `toggle_pause` return
/// the state unchanged once either is reached.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

impl GameStatus {
    /// Returns true once the game can no longer advance (loss or win).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// Complete game state for one session.
///
/// Every operation takes `&self` and returns a replacement value; nothing
/// mutates in place. The driver owns the current value and the RNG and
/// threads both strictly sequentially.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub fruits: Vec<Fruit>,
    pub skulls: Vec<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub wall_mode: WallMode,
    size: GridSize,
}

impl GameState {
    /// Builds the starting state: centered three-segment snake heading
    /// right, no skulls, one fruit of each kind (fewer only when the board
    /// is too small to hold them).
    #[must_use]
    pub fn new<R: Rng + ?Sized>(size: GridSize, wall_mode: WallMode, rng: &mut R) -> Self {
        let snake = Snake::centered(size);
        let fruits = fruit::respawn_all(size, &snake, &[], rng);

        Self {
            snake,
            direction: Direction::Right,
            fruits,
            skulls: Vec::new(),
            score: 0,
            status: GameStatus::Playing,
            wall_mode,
            size,
        }
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(size: GridSize, wall_mode: WallMode, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(size, wall_mode, &mut rng)
    }

    /// Returns the board dimensions, fixed for the session.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Applies a direction request.
    ///
    /// An exact reversal of the current direction is rejected, which is
    /// what prevents an instant self-collision. The snake itself is never
    /// touched here; the change takes effect on the next step.
    #[must_use]
    pub fn apply_direction(&self, requested: Direction) -> Self {
        if requested == self.direction.opposite() {
            return self.clone();
        }

        Self {
            direction: requested,
            ..self.clone()
        }
    }

    /// Toggles between playing and paused. Identity on finished games.
    #[must_use]
    pub fn toggle_pause(&self) -> Self {
        let status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::GameOver | GameStatus::Victory => return self.clone(),
        };

        Self {
            status,
            ..self.clone()
        }
    }

    /// Advances the game by one tick. Identity unless currently playing.
    ///
    /// Collision order is fixed: skulls first, then the snake body (with
    /// the tail cell exempt on a non-growing move), then fruit effects.
    #[must_use]
    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        if self.status != GameStatus::Playing {
            return self.clone();
        }

        // Movement always wraps; `wall_mode` is surfaced to the player but
        // never consulted here.
        let next_head = self.snake.head().stepped(self.direction).wrapped(self.size);

        if self.skulls.contains(&next_head) {
            return Self {
                status: GameStatus::GameOver,
                ..self.clone()
            };
        }

        let eaten = self
            .fruits
            .iter()
            .copied()
            .find(|fruit| fruit.position == next_head);
        let growth = eaten.map_or(0, |fruit| fruit.kind.growth());

        if self.snake.blocks(next_head, growth > 0) {
            return Self {
                status: GameStatus::GameOver,
                ..self.clone()
            };
        }

        let mut snake = self.snake.clone();
        snake.advance(next_head, growth);

        let Some(eaten) = eaten else {
            return Self {
                snake,
                ..self.clone()
            };
        };

        // Skull placement ignores fruit cells: the whole fruit layout is
        // recomputed below, and a skull may land under a leftover fruit.
        let mut skulls = self.skulls.clone();
        let mut occupied: HashSet<Position> = snake
            .segments()
            .copied()
            .chain(skulls.iter().copied())
            .collect();
        for _ in 0..eaten.kind.skull_spawns() {
            let Some(cell) = place_random_cell(self.size, &occupied, rng) else {
                break;
            };
            occupied.insert(cell);
            skulls.push(cell);
        }

        let fruits = fruit::respawn_all(self.size, &snake, &skulls, rng);

        let occupied_now = snake.len() + skulls.len() + fruits.len();
        let status = if occupied_now >= self.size.total_cells() {
            GameStatus::Victory
        } else {
            GameStatus::Playing
        };

        Self {
            snake,
            fruits,
            skulls,
            score: self.score + 1,
            status,
            ..self.clone()
        }
    }
}
