pub mod movement;
pub mod collision;
pub mod rules;
pub mod render;

pub use movement::*;
pub use collision::*;
pub use rules::*;
pub use render::*;
