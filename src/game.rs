use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::GridSize;
use crate::food::{EvasionPolicy, spawn_position};
use crate::grid::{Position, toroidal_distance};
use crate::input::{Direction, direction_change_is_valid};
use crate::settings::Settings;
use crate::snake::Snake;

/// Where a fresh session's one-cell snake starts.
pub const START_POSITION: Position = Position { x: 0, y: 0 };

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    direction: Direction,
    food: Option<Position>,
    move_count: u64,
    game_over: bool,
    initial_size: usize,
    bounds: GridSize,
    policy: EvasionPolicy,
    rng: StdRng,
}

/// Read-only view of one moment of a session, as printed by headless runs.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub move_count: u64,
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: usize,
    pub game_over: bool,
}

impl GameState {
    /// Creates a session seeded from system entropy.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(settings: &Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &Settings, rng: StdRng) -> Self {
        Self {
            snake: Snake::new(START_POSITION, settings.initial_snake_size),
            direction: Direction::Right,
            food: None,
            move_count: 0,
            game_over: false,
            initial_size: settings.initial_snake_size,
            bounds: settings.grid_size(),
            policy: settings.evasion_policy(),
            rng,
        }
    }

    /// Turns the snake and immediately moves it one cell.
    ///
    /// Returns `false` without touching anything when the game is over or
    /// `direction` stays on the current axis of travel. A `true` return means
    /// a tick was consumed, so the caller should restart its step timer.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.game_over || !direction_change_is_valid(self.direction, direction) {
            trace!("ignoring turn {:?} while heading {:?}", direction, self.direction);
            return false;
        }

        self.direction = direction;
        self.advance();
        true
    }

    /// Advances simulation by one gameplay tick.
    pub fn advance(&mut self) {
        if self.game_over {
            return;
        }

        self.snake.move_forward(self.direction, self.bounds);

        if self.snake.head_overlaps_body() {
            self.game_over = true;
            info!(
                "snake ran into itself at {:?}; final score {}",
                self.snake.head(),
                self.score()
            );
        }

        self.resolve_food();
        self.move_count += 1;
    }

    fn resolve_food(&mut self) {
        let head = self.snake.head();

        match self.food {
            Some(food) if food != head => {
                if self.policy.should_flee(self.move_count, food, head, self.bounds) {
                    let next = self.policy.relocate(
                        &mut self.rng,
                        self.bounds,
                        &self.snake,
                        self.direction,
                        food,
                    );
                    if next != food {
                        debug!(
                            "food flees from {food:?} to {next:?}, {:.2} cells from the head",
                            toroidal_distance(head, next, self.bounds)
                        );
                    }
                    self.food = Some(next);
                }
            }
            _ => {
                self.snake.grow();
                self.food = spawn_position(&mut self.rng, self.bounds, &self.snake);
                debug!(
                    "target size now {}; food spawned at {:?}",
                    self.snake.target_len(),
                    self.food
                );
            }
        }
    }

    /// Score derived from how far the snake has grown past its start.
    #[must_use]
    pub fn score(&self) -> usize {
        self.snake
            .target_len()
            .saturating_sub(self.initial_size)
            .saturating_sub(1)
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of ticks applied so far.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            move_count: self.move_count,
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score(),
            game_over: self.game_over,
        }
    }
}
