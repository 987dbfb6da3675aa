pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use utils::SimError;
