use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::direction::Direction;
use super::grid::{tile_contains, Position};
use super::state::{Apple, CollisionType, GameState, Obstacles, Phase, Snake};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate the apple this tick.
    pub ate_apple: bool,
    /// Set when the tick ended the round; the cause picks the sound cue.
    pub collision: Option<CollisionType>,
}

/// The game engine: owns the configuration and the RNG, builds fresh rounds,
/// and advances a round one tick at a time.
pub struct GameEngine {
    config: GameConfig,
    rng: ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh round: snake of initial length at tile (1, 1) facing
    /// down, apple at its fixed start cell, a new obstacle field.
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(
            Position::tile(1, 1),
            Direction::Down,
            self.config.initial_snake_length,
        );

        GameState::new(
            snake,
            Apple::new(),
            Obstacles::new(),
            self.config.surface_width,
            self.config.surface_height,
        )
    }

    /// Advance the round by one tick. Paused and finished rounds are left
    /// untouched. A round-ending collision is an ordinary state transition
    /// (Running to GameOver) reported in the outcome, not an error.
    ///
    /// Check order: boundary, apple, self, obstacle. The first collision
    /// found ends the tick; growth from an apple eaten on the same tick is
    /// kept even if a later check ends the round.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.phase != Phase::Running {
            return TickOutcome::default();
        }

        state.snake.advance();
        let head = state.snake.head();

        if !state.is_in_bounds(head) {
            return Self::end_round(state, CollisionType::Boundary, false);
        }

        let ate_apple = tile_contains(state.apple.position, head.x, head.y);
        if ate_apple {
            state.snake.grow();
            state.apple.relocate(&mut self.rng);
        }

        if state.snake.hits_own_body() {
            return Self::end_round(state, CollisionType::SelfCollision, ate_apple);
        }

        if state.obstacles.collides(head.x, head.y) {
            return Self::end_round(state, CollisionType::Obstacle, ate_apple);
        }

        TickOutcome {
            ate_apple,
            collision: None,
        }
    }

    fn end_round(state: &mut GameState, cause: CollisionType, ate_apple: bool) -> TickOutcome {
        state.phase = Phase::GameOver;
        TickOutcome {
            ate_apple,
            collision: Some(cause),
        }
    }
}
