//! Game layer root module.
//!
//! Board types, entities (paddles and ball), the systems that move and draw
//! them, keyboard input, and the fixed-rate loop tying them together.

pub mod types;
pub mod state;
pub mod input;
pub mod terminal;
pub mod game_loop;

pub mod entities;
pub mod systems;
