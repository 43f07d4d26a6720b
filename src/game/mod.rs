//! Core game logic for the snake arcade game.
//!
//! Everything in here is pure state and rules: grid geometry, the entities,
//! and the per-tick update. No I/O, rendering, or audio dependencies.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use grid::{tile_contains, Position, TILE_SIZE};
pub use state::{Apple, CollisionType, GameState, Obstacles, Phase, Snake, APPLE_START};
