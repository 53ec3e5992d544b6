use thiserror::Error;

pub type ProfileResult<T> = std::result::Result<T, ProfileError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Index {index} is out of bounds for {len} skills")]
    InvalidIndex { index: usize, len: usize },
    #[error("Invalid skill text: {0}")]
    InvalidInput(String),
}
