use snake_arcade::config::DEFAULT_GRID;
use snake_arcade::food::Food;
use snake_arcade::game::{GameState, GameStatus};
use snake_arcade::input::Direction;
use snake_arcade::snake::{Position, Snake};

#[test]
fn stepwise_food_collection_turn_and_wrap() {
    let mut state = GameState::new_with_seed(DEFAULT_GRID, 42);
    state.start();
    state.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
    state.food = Food::new(Position { x: 6, y: 5 });

    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 10);
    let body: Vec<_> = state.snake.segments().copied().collect();
    assert_eq!(body, vec![Position { x: 6, y: 5 }, Position { x: 5, y: 5 }]);

    // Pin the respawned entities away from the path for the rest of the run.
    state.food = Food::new(Position { x: 20, y: 15 });
    state.special_food = None;

    state.set_direction(Direction::Up);
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 6, y: 4 });
    assert_eq!(state.snake.len(), 2);

    // Four more ticks up reach the top edge, the fifth wraps around.
    for _ in 0..4 {
        state.tick();
    }
    assert_eq!(state.snake.head(), Position { x: 6, y: 0 });

    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 6, y: 19 });
}

#[test]
fn crossing_each_edge_reenters_from_the_opposite_side() {
    let cases = [
        (Position { x: 29, y: 5 }, Direction::Right, Position { x: 0, y: 5 }),
        (Position { x: 0, y: 5 }, Direction::Left, Position { x: 29, y: 5 }),
        (Position { x: 5, y: 19 }, Direction::Down, Position { x: 5, y: 0 }),
        (Position { x: 5, y: 0 }, Direction::Up, Position { x: 5, y: 19 }),
    ];

    for (start, direction, expected) in cases {
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 7);
        state.start();
        state.snake = Snake::new(start, direction);
        state.food = Food::new(Position { x: 15, y: 10 });

        state.tick();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), expected);
    }
}

#[test]
fn self_collision_is_terminal_until_restart() {
    let mut state = GameState::new_with_seed(DEFAULT_GRID, 9);
    state.start();
    state.snake = Snake::from_segments(
        vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 1, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 3, y: 3 },
            Position { x: 3, y: 2 },
        ],
        Direction::Left,
    );
    state.food = Food::new(Position { x: 20, y: 15 });

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);

    // Neither further ticks nor inputs mutate the terminal state.
    let head = state.snake.head();
    state.set_direction(Direction::Down);
    state.toggle_pause();
    for _ in 0..3 {
        state.tick();
    }
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.snake.head(), head);

    // Only a full restart leaves GameOver.
    state.start();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 1);
}
