mod emit;
mod idents;
pub mod model;
mod render;

pub use emit::Emitter;
pub use render::{JavaRenderer, Render};
