//! Terminal rendering of the game board

pub mod renderer;

pub use renderer::Renderer;
