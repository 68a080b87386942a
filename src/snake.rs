use crate::config::{ANIMATION_STEPS, GridSize, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;
use crate::obstacle::Obstacle;

/// Body segments nearest the head that are exempt from self-collision.
///
/// The trailing-segment removal lags one step behind logical growth, so the
/// three cells closest to the head can legitimately coincide with the next
/// head cell. A snake of length 3 or less can therefore never bite itself.
const SELF_COLLISION_EXEMPT_SEGMENTS: usize = 3;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbor one step away in `direction`, without wrapping.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// What the snake ran into when a step was refused.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    ObstacleCollision,
    SelfCollision,
}

/// Movement phase of the snake.
///
/// `Idle` means at rest on a grid cell, ready to compute the next step.
/// `Interpolating` means animating toward an already-validated next
/// configuration over `ANIMATION_STEPS` rendered sub-steps. Collision is
/// evaluated once per logical step, never per sub-step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Motion {
    Idle,
    Interpolating {
        sub_step: u16,
        pending: Vec<Position>,
    },
}

/// Snake state: position history, growth target, score, and motion phase.
#[derive(Debug, Clone)]
pub struct Snake {
    positions: Vec<Position>,
    length: usize,
    direction: Direction,
    pub score: u32,
    motion: Motion,
}

impl Snake {
    /// Creates a snake of `INITIAL_SNAKE_LENGTH` with its head at `head` and
    /// body trailing opposite to `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction) -> Self {
        let mut positions = vec![head];
        for i in 1..INITIAL_SNAKE_LENGTH {
            let trail = direction.opposite();
            let (dx, dy) = trail.offset();
            positions.push(Position {
                x: head.x + dx * i as i32,
                y: head.y + dy * i as i32,
            });
        }

        Self {
            positions,
            length: INITIAL_SNAKE_LENGTH,
            direction,
            score: 0,
            motion: Motion::Idle,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The growth target is set to the segment count.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        let length = segments.len();
        Self {
            positions: segments,
            length,
            direction,
            score: 0,
            motion: Motion::Idle,
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .positions
            .first()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Returns the number of cells currently occupied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the growth target the body is catching up to.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.length
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the movement direction without validation.
    ///
    /// Reversal filtering is the session's job; see
    /// `input::direction_change_is_valid`.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Raises the growth target by one cell.
    ///
    /// The body grows via the placeholder appended by the next `begin_step`,
    /// which becomes permanent once that interpolation commits.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Returns the current motion phase.
    #[must_use]
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Returns true when at rest on a grid cell.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.motion, Motion::Idle)
    }

    /// Validates and stages the next logical step.
    ///
    /// Computes the wrapped next head cell and refuses the step, mutating
    /// nothing, when that cell hits an obstacle or a body segment at index
    /// ≥ 3. On success stages the pending next configuration and enters
    /// `Interpolating`: the next head, every current segment shifted back by
    /// one, and, when the body has not yet grown into its target length, the
    /// prior tail cell as placeholder so every rendered segment has an
    /// interpolation destination.
    pub fn begin_step(
        &mut self,
        bounds: GridSize,
        obstacles: &[Obstacle],
    ) -> Result<(), DeathReason> {
        debug_assert!(self.is_idle());
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next_head = self.head().stepped(self.direction).wrapped(bounds);

        if obstacles.iter().any(|o| o.position == next_head) {
            return Err(DeathReason::ObstacleCollision);
        }
        if self
            .positions
            .iter()
            .skip(SELF_COLLISION_EXEMPT_SEGMENTS)
            .any(|segment| *segment == next_head)
        {
            return Err(DeathReason::SelfCollision);
        }

        let mut pending = Vec::with_capacity(self.positions.len() + 1);
        pending.push(next_head);
        pending.extend(self.positions.iter().take(self.positions.len() - 1));
        if pending.len() < self.length {
            if let Some(&tail) = self.positions.last() {
                pending.push(tail);
            }
        }

        self.motion = Motion::Interpolating {
            sub_step: 0,
            pending,
        };
        Ok(())
    }

    /// Advances the interpolation by one sub-step.
    ///
    /// Once the counter reaches `ANIMATION_STEPS` the pending configuration
    /// is committed, the body is trimmed back to the growth target, and the
    /// snake returns to `Idle`. Returns true exactly on the commit tick —
    /// the only tick where the logical head cell changes.
    pub fn advance_animation(&mut self) -> bool {
        let Motion::Interpolating { sub_step, pending } =
            std::mem::replace(&mut self.motion, Motion::Idle)
        else {
            return false;
        };

        let sub_step = sub_step + 1;
        if sub_step >= ANIMATION_STEPS {
            self.positions = pending;
            if self.positions.len() > self.length {
                self.positions.pop();
            }
            return true;
        }

        self.motion = Motion::Interpolating { sub_step, pending };
        false
    }

    /// Linear interpolation between two cells at `sub_step` of
    /// `ANIMATION_STEPS`. Rendering only; logical state never depends on it.
    ///
    /// Wrap seams interpolate straight across the board rather than around
    /// the edge.
    #[must_use]
    pub fn interpolated_position(from: Position, to: Position, sub_step: u16) -> (f32, f32) {
        let progress = f32::from(sub_step) / f32::from(ANIMATION_STEPS);
        (
            from.x as f32 + (to.x - from.x) as f32 * progress,
            from.y as f32 + (to.y - from.y) as f32 * progress,
        )
    }

    /// Returns the rendered sub-position of every segment, head first.
    #[must_use]
    pub fn render_segments(&self) -> Vec<(f32, f32)> {
        match &self.motion {
            Motion::Idle => self
                .positions
                .iter()
                .map(|p| (p.x as f32, p.y as f32))
                .collect(),
            Motion::Interpolating { sub_step, pending } => self
                .positions
                .iter()
                .enumerate()
                .map(|(i, p)| match pending.get(i) {
                    Some(next) => Self::interpolated_position(*p, *next, *sub_step),
                    None => (p.x as f32, p.y as f32),
                })
                .collect(),
        }
    }
}
