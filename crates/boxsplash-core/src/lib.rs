pub mod app;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod panel;
pub mod projection;
pub mod world;
pub static BOXES_WGSL: &str = include_str!("../shaders/boxes.wgsl");

pub use app::*;
pub use clock::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use panel::*;
pub use projection::*;
pub use world::*;
