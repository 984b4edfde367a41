pub mod mesh;
pub mod renderer;


pub use renderer::{CubeRenderer, DEPTH_FORMAT};
