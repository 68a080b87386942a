use std::f32::consts::TAU;

use rand::Rng;

use crate::config::{
    BASE_OBSTACLE_COUNT, GridSize, MAX_WALL_LENGTH, MIN_WALL_LENGTH, OBSTACLES_PER_LEVEL,
    SPAWN_CLEARANCE,
};
use crate::snake::Position;

/// One static obstacle cell.
///
/// `pattern_offset` and `shine_phase` are cosmetic render variation only;
/// gameplay logic never reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Position,
    pub pattern_offset: u8,
    pub shine_phase: f32,
}

impl Obstacle {
    /// Creates an obstacle with neutral cosmetics, mainly for tests.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position,
            pattern_offset: 0,
            shine_phase: 0.0,
        }
    }

    fn sampled<R: Rng + ?Sized>(rng: &mut R, position: Position) -> Self {
        Self {
            position,
            pattern_offset: rng.gen_range(0..100),
            shine_phase: rng.gen_range(0.0..TAU),
        }
    }
}

/// Returns the number of wall structures generated for `level`.
#[must_use]
pub fn unit_count(level: u32) -> u32 {
    BASE_OBSTACLE_COUNT + OBSTACLES_PER_LEVEL * level.saturating_sub(1)
}

/// Generates the full obstacle set for `level`.
///
/// Each wall unit picks an orientation uniformly, then a uniform start cell
/// and run length in `[MIN_WALL_LENGTH, MAX_WALL_LENGTH]` bounded so the run
/// fits the grid, and emits one cell per step. Cells within a Chebyshev
/// distance of `SPAWN_CLEARANCE` from the grid center are skipped so the
/// snake's spawn area stays clear. Runs may overlap or duplicate cells; a
/// cell is simply obstructed or not, and no connectivity or fairness
/// guarantee is made.
#[must_use]
pub fn generate<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, level: u32) -> Vec<Obstacle> {
    let width = i32::from(bounds.width);
    let height = i32::from(bounds.height);
    let center = bounds.center();

    let mut obstacles = Vec::new();
    for _ in 0..unit_count(level) {
        let horizontal = rng.gen_bool(0.5);
        let run_length = i32::from(rng.gen_range(MIN_WALL_LENGTH..=MAX_WALL_LENGTH));

        let (start, step) = if horizontal {
            let start_x = rng.gen_range(2..=(width - i32::from(MAX_WALL_LENGTH) - 2).max(2));
            let start_y = rng.gen_range(2..=(height - 2).max(2));
            (Position { x: start_x, y: start_y }, (1, 0))
        } else {
            let start_x = rng.gen_range(2..=(width - 2).max(2));
            let start_y = rng.gen_range(2..=(height - i32::from(MAX_WALL_LENGTH) - 2).max(2));
            (Position { x: start_x, y: start_y }, (0, 1))
        };

        for i in 0..run_length {
            let position = Position {
                x: start.x + step.0 * i,
                y: start.y + step.1 * i,
            };
            let clear_of_spawn = (position.x - center.x).abs() > SPAWN_CLEARANCE
                || (position.y - center.y).abs() > SPAWN_CLEARANCE;
            if clear_of_spawn && position.is_within_bounds(bounds) {
                obstacles.push(Obstacle::sampled(rng, position));
            }
        }
    }

    obstacles
}

/// Returns true if any obstacle occupies `position`.
#[must_use]
pub fn occupies(obstacles: &[Obstacle], position: Position) -> bool {
    obstacles.iter().any(|o| o.position == position)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::{GridSize, SPAWN_CLEARANCE};

    use super::{generate, unit_count};

    const BOUNDS: GridSize = GridSize {
        width: 40,
        height: 30,
    };

    #[test]
    fn unit_count_follows_level_formula() {
        assert_eq!(unit_count(1), 4);
        assert_eq!(unit_count(2), 6);
        assert_eq!(unit_count(5), 12);
    }

    #[test]
    fn generated_cells_stay_inside_the_grid() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for obstacle in generate(&mut rng, BOUNDS, 4) {
                assert!(obstacle.position.is_within_bounds(BOUNDS));
            }
        }
    }

    #[test]
    fn spawn_area_around_center_is_kept_clear() {
        let center = BOUNDS.center();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for obstacle in generate(&mut rng, BOUNDS, 6) {
                let chebyshev = (obstacle.position.x - center.x)
                    .abs()
                    .max((obstacle.position.y - center.y).abs());
                assert!(
                    chebyshev > SPAWN_CLEARANCE,
                    "obstacle at {:?} inside spawn clearance",
                    obstacle.position
                );
            }
        }
    }

    #[test]
    fn same_seed_yields_same_layout() {
        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(11);

        let a: Vec<_> = generate(&mut rng_a, BOUNDS, 3)
            .iter()
            .map(|o| o.position)
            .collect();
        let b: Vec<_> = generate(&mut rng_b, BOUNDS, 3)
            .iter()
            .map(|o| o.position)
            .collect();

        assert_eq!(a, b);
    }
}
