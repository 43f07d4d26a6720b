use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the game. The playfield, tile size, and tick rate are
/// fixed by the defaults; nothing here is exposed on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield surface width in pixels.
    pub surface_width: i32,
    /// Playfield surface height in pixels.
    pub surface_height: i32,
    /// Snake length at the start of every round.
    pub initial_snake_length: usize,
    /// Fixed delay between game ticks, in milliseconds.
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: 1000,
            surface_height: 800,
            initial_snake_length: 1,
            tick_ms: 200,
        }
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
