use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cube index {index} out of range for a scene of {len} cubes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Render error: {0}")]
    RenderError(String),
}
