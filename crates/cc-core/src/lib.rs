pub mod camera;
pub mod config;
pub mod error;
pub mod math;
pub mod picking;
pub mod scene;
pub mod session;

mod tests;

pub use error::{Error, Result};
