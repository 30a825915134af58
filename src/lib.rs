//! Grid Snake - a single-player snake game on a fixed-size grid
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard mapping (input module)
//! - Terminal rendering (render module)
//! - The interactive frame loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
