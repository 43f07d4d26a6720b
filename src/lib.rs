//! Snake arcade - a minimal real-time snake game for the terminal
//!
//! This library provides:
//! - Core game logic: grid, entities, collisions, tick (game module)
//! - Key-event mapping (input module)
//! - TUI rendering with a two-variant cell skin (render module)
//! - Fire-and-forget sound cues (audio module)
//! - In-session round stats (metrics module)
//! - The interactive driver loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
