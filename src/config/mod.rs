/// Main configuration module.
/// 
/// Re-exports submodules for gameplay constants, input timing and runtime settings.
pub mod game;
pub mod input;
pub mod settings;

pub use settings::{Cli, GameConfig};
