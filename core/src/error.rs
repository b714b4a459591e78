//! Error type shared by every fallible operation in the crate
//!
//! Precondition violations (a zero bound passed to `get_uint32`) are not
//! represented here; they panic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RandomError {
    /// `sample` asked for more elements than the population holds
    #[error("population size {population} is smaller than requested choice count {requested}")]
    InvalidArgument { requested: usize, population: usize },

    /// Serialized generator state could not be parsed or failed validation
    #[error("Malformed random state: {0}")]
    Format(String),

    /// Configuration could not be parsed
    #[error("Invalid config: {0}")]
    Config(String),

    /// A seed function has already been installed on this provider
    #[error("A seed function is already bound to this provider")]
    SeederAlreadyBound,

    /// Stream errors from save/load, passed through untouched
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RandomError>;
