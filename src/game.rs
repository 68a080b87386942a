use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{BONUS_FOOD_POINTS, GridSize, LENGTH_PER_LEVEL};
use crate::food::{BonusFood, Food, PlacementExhausted};
use crate::input::{self, Direction, GameInput};
use crate::obstacle::{self, Obstacle};
use crate::snake::{DeathReason, Snake};

/// Current high-level gameplay state.
///
/// `Playing` transitions one-way into either terminal state: `GameOver` on
/// collision, `BoardFull` when no free cell remains for the mandatory food.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    BoardFull,
}

/// Complete mutable game state for one session.
///
/// Fields are public so tests and the presentation shell can set up exact
/// board configurations.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub bonus_food: BonusFood,
    pub obstacles: Vec<Obstacle>,
    pub level: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pending_direction: Option<Direction>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with an entropy-seeded random source.
    pub fn new(bounds: GridSize) -> Result<Self, PlacementExhausted> {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Result<Self, PlacementExhausted> {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Result<Self, PlacementExhausted> {
        let snake = Snake::new(bounds.center(), Direction::Right);
        let obstacles = obstacle::generate(&mut rng, bounds, 1);
        let food = Food::spawn(&mut rng, bounds, &obstacles, &snake)?;

        Ok(Self {
            snake,
            food,
            bonus_food: BonusFood::new(),
            obstacles,
            level: 1,
            status: GameStatus::Playing,
            death_reason: None,
            pending_direction: None,
            bounds,
            rng,
        })
    }

    /// Returns the grid dimensions of this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns true once a terminal state has been reached.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Applies one external input event.
    ///
    /// Direction requests are staged (last one wins) and validated against
    /// reversal on the next tick; any input outside `Playing` is ignored.
    pub fn apply_input(&mut self, game_input: GameInput) {
        if self.status != GameStatus::Playing {
            return;
        }

        if let GameInput::Direction(direction) = game_input {
            self.pending_direction = Some(direction);
        }
    }

    /// Advances the session by one tick.
    ///
    /// `now` is the elapsed time since the session started; it drives the
    /// bonus food lifetime and nothing else. One tick is one rendered frame:
    /// a logical step spans `ANIMATION_STEPS + 1` ticks (one to stage the
    /// step, the rest to interpolate and commit).
    pub fn tick(&mut self, now: Duration) {
        if self.status != GameStatus::Playing {
            return;
        }

        if let Some(requested) = self.pending_direction.take() {
            if input::direction_change_is_valid(self.snake.direction(), requested) {
                self.snake.set_direction(requested);
            }
        }

        if self.snake.is_idle() {
            if let Err(reason) = self.snake.begin_step(self.bounds, &self.obstacles) {
                self.status = GameStatus::GameOver;
                self.death_reason = Some(reason);
                return;
            }
        } else if self.snake.advance_animation() {
            // The logical head cell changes only on the commit tick, so
            // consumption is evaluated here and nowhere else.
            self.handle_step_commit(now);
            if self.status != GameStatus::Playing {
                return;
            }
        }

        if let Some(position) = self.bonus_food.position() {
            if self.snake.head() == position {
                self.snake.score += BONUS_FOOD_POINTS;
                self.bonus_food.consume();
            }
        }

        self.bonus_food.tick(now);
    }

    fn handle_step_commit(&mut self, now: Duration) {
        if self.snake.head() != self.food.position {
            return;
        }

        self.snake.grow();
        self.snake.score += 1;

        match self
            .food
            .relocate(&mut self.rng, self.bounds, &self.obstacles, &self.snake)
        {
            Ok(()) => {
                self.bonus_food.try_spawn(
                    &mut self.rng,
                    self.bounds,
                    &self.obstacles,
                    &self.snake,
                    self.food.position,
                    now,
                );
            }
            Err(PlacementExhausted) => {
                self.status = GameStatus::BoardFull;
                return;
            }
        }

        if self.snake.target_length() % LENGTH_PER_LEVEL == 0 {
            self.level += 1;
            self.obstacles = obstacle::generate(&mut self.rng, self.bounds, self.level);
        }
    }
}
