use std::time::Duration;

use rand::Rng;
use thiserror::Error;

use crate::config::{BONUS_FOOD_CHANCE, BONUS_FOOD_LIFETIME, GridSize, PLACEMENT_ATTEMPTS_PER_CELL};
use crate::obstacle::{self, Obstacle};
use crate::snake::{Position, Snake};

/// Rejection sampling ran out of attempts without finding a free cell.
///
/// On a finite grid this is a reachable state once the snake occupies nearly
/// every cell; the session treats it as board-full rather than hanging.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("no free cell found for placement (board effectively full)")]
pub struct PlacementExhausted;

/// Samples a uniformly random cell until one is free of obstacles, snake
/// segments, and `also_exclude`. Attempts are bounded by grid size.
fn sample_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    obstacles: &[Obstacle],
    snake: &Snake,
    also_exclude: Option<Position>,
) -> Result<Position, PlacementExhausted> {
    let attempts = bounds
        .total_cells()
        .saturating_mul(PLACEMENT_ATTEMPTS_PER_CELL)
        .max(1);

    for _ in 0..attempts {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if obstacle::occupies(obstacles, candidate)
            || snake.occupies(candidate)
            || Some(candidate) == also_exclude
        {
            continue;
        }
        return Ok(candidate);
    }

    Err(PlacementExhausted)
}

/// The single mandatory food item.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at a fixed position, mainly for tests.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food on a free cell.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        obstacles: &[Obstacle],
        snake: &Snake,
    ) -> Result<Self, PlacementExhausted> {
        Ok(Self {
            position: sample_free_cell(rng, bounds, obstacles, snake, None)?,
        })
    }

    /// Moves the food to a fresh free cell after it was eaten.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        obstacles: &[Obstacle],
        snake: &Snake,
    ) -> Result<(), PlacementExhausted> {
        self.position = sample_free_cell(rng, bounds, obstacles, snake, None)?;
        Ok(())
    }
}

/// Intermittent bonus food with a fixed lifetime.
///
/// Inactive most of the time; spawning is attempted whenever the mandatory
/// food is eaten and succeeds with `BONUS_FOOD_CHANCE`. Timing is keyed on a
/// caller-supplied `now` (elapsed time since session start) so expiry is
/// deterministic in tests.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BonusFood {
    spawned: Option<(Position, Duration)>,
}

impl BonusFood {
    /// Creates an inactive bonus food.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the bonus is on the board.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.spawned.is_some()
    }

    /// Returns the occupied cell while active.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.spawned.map(|(position, _)| position)
    }

    /// Rolls the spawn chance and places the bonus on a free cell.
    ///
    /// No-op while already active. The mandatory food cell is excluded on
    /// top of the usual obstacle and snake exclusions. When sampling is
    /// exhausted the bonus simply stays inactive, which is observably the
    /// same as losing the spawn roll.
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        obstacles: &[Obstacle],
        snake: &Snake,
        food: Position,
        now: Duration,
    ) {
        if self.is_active() || !rng.gen_bool(BONUS_FOOD_CHANCE) {
            return;
        }

        if let Ok(position) = sample_free_cell(rng, bounds, obstacles, snake, Some(food)) {
            self.spawned = Some((position, now));
        }
    }

    /// Activates the bonus at a fixed cell, bypassing the spawn roll.
    pub fn spawn_at(&mut self, position: Position, now: Duration) {
        self.spawned = Some((position, now));
    }

    /// Expires the bonus once its lifetime has elapsed, eaten or not.
    pub fn tick(&mut self, now: Duration) {
        if let Some((_, spawned_at)) = self.spawned {
            if now.saturating_sub(spawned_at) > BONUS_FOOD_LIFETIME {
                self.spawned = None;
            }
        }
    }

    /// Deactivates immediately upon being eaten, independent of the timer.
    pub fn consume(&mut self) {
        self.spawned = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::obstacle::Obstacle;
    use crate::snake::{Position, Snake};

    use super::{BonusFood, Food, PlacementExhausted};

    const BOUNDS: GridSize = GridSize {
        width: 8,
        height: 6,
    };

    fn short_snake() -> Snake {
        Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        )
    }

    #[test]
    fn food_never_spawns_on_snake_or_obstacles() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = short_snake();
        let obstacles = [
            Obstacle::at(Position { x: 4, y: 4 }),
            Obstacle::at(Position { x: 5, y: 4 }),
        ];

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, BOUNDS, &obstacles, &snake).expect("free cells exist");
            assert!(!snake.occupies(food.position));
            assert!(!obstacles.iter().any(|o| o.position == food.position));
        }
    }

    #[test]
    fn full_board_surfaces_placement_exhausted() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize {
            width: 3,
            height: 1,
        };
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );

        let result = Food::spawn(&mut rng, bounds, &[], &snake);

        assert_eq!(result, Err(PlacementExhausted));
    }

    #[test]
    fn bonus_spawn_avoids_the_mandatory_food_cell() {
        // Grid with exactly one free cell once snake and food are excluded.
        let bounds = GridSize {
            width: 5,
            height: 1,
        };
        let snake = short_snake();
        let food = Position { x: 3, y: 0 };

        let mut spawned_once = false;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut bonus = BonusFood::new();
            bonus.try_spawn(&mut rng, bounds, &[], &snake, food, Duration::ZERO);

            if bonus.is_active() {
                spawned_once = true;
                assert_eq!(bonus.position(), Some(Position { x: 4, y: 0 }));
            }
        }
        assert!(spawned_once, "spawn roll never succeeded across 200 seeds");
    }

    #[test]
    fn bonus_expires_strictly_after_its_lifetime() {
        let mut bonus = BonusFood::new();
        bonus.spawn_at(Position { x: 2, y: 2 }, Duration::from_millis(1000));

        bonus.tick(Duration::from_millis(6000));
        assert!(bonus.is_active(), "exactly at lifetime must still be active");

        bonus.tick(Duration::from_millis(6001));
        assert!(!bonus.is_active());
        assert_eq!(bonus.position(), None);
    }

    #[test]
    fn consumption_deactivates_before_the_timer() {
        let mut bonus = BonusFood::new();
        bonus.spawn_at(Position { x: 2, y: 2 }, Duration::ZERO);

        bonus.consume();

        assert!(!bonus.is_active());
        // A later timer tick stays a no-op.
        bonus.tick(Duration::from_millis(10_000));
        assert!(!bonus.is_active());
    }

    #[test]
    fn active_bonus_ignores_further_spawn_attempts() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bonus = BonusFood::new();
        bonus.spawn_at(Position { x: 2, y: 2 }, Duration::ZERO);

        for _ in 0..50 {
            bonus.try_spawn(
                &mut rng,
                BOUNDS,
                &[],
                &short_snake(),
                Position { x: 3, y: 3 },
                Duration::ZERO,
            );
        }

        assert_eq!(bonus.position(), Some(Position { x: 2, y: 2 }));
    }
}
