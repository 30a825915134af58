//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.

pub mod action;
pub mod config;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use food::Food;
pub use grid::{Cell, Grid, PixelRect};
pub use snake::{Segment, SegmentRole, Snake};
pub use state::{CollisionType, GameState, TickOutcome};
