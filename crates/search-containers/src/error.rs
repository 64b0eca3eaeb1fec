use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContainerError>;

/// Failures reported by the containers in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("key not found")]
    KeyNotFound,

    #[error("container is empty")]
    EmptyContainer,

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
