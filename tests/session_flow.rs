use std::time::Duration;

use arcade_snake::config::{ANIMATION_STEPS, GridSize};
use arcade_snake::food::Food;
use arcade_snake::game::{GameSession, GameStatus};
use arcade_snake::input::{Direction, GameInput};
use arcade_snake::obstacle::Obstacle;
use arcade_snake::snake::{DeathReason, Position, Snake};

const BOUNDS: GridSize = GridSize {
    width: 20,
    height: 16,
};

/// Drives one full logical step: stage + interpolate + commit.
fn advance_one_step(session: &mut GameSession, now: Duration) {
    for _ in 0..=ANIMATION_STEPS {
        session.tick(now);
    }
}

#[test]
fn one_logical_step_spans_the_animation_ticks() {
    let mut session = GameSession::new_with_seed(BOUNDS, 7).expect("fresh board has free cells");
    session.obstacles.clear();
    session.snake = Snake::new(Position { x: 5, y: 8 }, Direction::Right);
    session.food = Food::at(Position { x: 0, y: 0 });

    for _ in 0..ANIMATION_STEPS {
        session.tick(Duration::ZERO);
        assert_eq!(session.snake.head(), Position { x: 5, y: 8 });
    }

    session.tick(Duration::ZERO);
    assert_eq!(session.snake.head(), Position { x: 6, y: 8 });
}

#[test]
fn stepwise_food_collection_turn_and_obstacle_collision() {
    let mut session = GameSession::new_with_seed(BOUNDS, 42).expect("fresh board has free cells");
    session.obstacles.clear();
    session.snake = Snake::new(Position { x: 5, y: 8 }, Direction::Right);
    session.food = Food::at(Position { x: 6, y: 8 });

    // Step 1: eat the food directly ahead.
    advance_one_step(&mut session, Duration::ZERO);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.snake.score, 1);
    assert_eq!(session.snake.target_length(), 4);
    assert_eq!(session.snake.head(), Position { x: 6, y: 8 });
    assert!(!session.snake.occupies(session.food.position));

    // Step 2: turn up; the body catches up to the growth target.
    session.food = Food::at(Position { x: 0, y: 0 });
    session.apply_input(GameInput::Direction(Direction::Up));
    advance_one_step(&mut session, Duration::ZERO);
    assert_eq!(session.snake.head(), Position { x: 6, y: 7 });
    assert_eq!(session.snake.len(), 4);

    // Step 3: wall dead ahead ends the session.
    session.obstacles = vec![Obstacle::at(Position { x: 6, y: 6 })];
    advance_one_step(&mut session, Duration::ZERO);
    assert_eq!(session.status, GameStatus::GameOver);
    assert_eq!(session.death_reason, Some(DeathReason::ObstacleCollision));
}

#[test]
fn bonus_food_is_worth_five_and_expires_on_its_own() {
    let mut session = GameSession::new_with_seed(BOUNDS, 11).expect("fresh board has free cells");
    session.obstacles.clear();
    session.snake = Snake::new(Position { x: 5, y: 8 }, Direction::Right);
    session.food = Food::at(Position { x: 0, y: 0 });

    // Eaten bonus: deactivates immediately and pays out.
    session
        .bonus_food
        .spawn_at(Position { x: 6, y: 8 }, Duration::ZERO);
    advance_one_step(&mut session, Duration::ZERO);
    assert_eq!(session.snake.score, 5);
    assert!(!session.bonus_food.is_active());

    // Ignored bonus: expires once its lifetime has passed, score unchanged.
    session
        .bonus_food
        .spawn_at(Position { x: 15, y: 2 }, Duration::from_millis(1000));
    advance_one_step(&mut session, Duration::from_millis(6001));
    assert!(!session.bonus_food.is_active());
    assert_eq!(session.snake.score, 5);
}
