use thiserror::Error;

use crate::profiles::ProfileError;

pub type ControllerResult<T> = std::result::Result<T, ControllerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Row {index} is out of range ({rows} rows)")]
    IndexOutOfRange { index: usize, rows: usize },
    #[error("Skills can only be changed in edit mode")]
    NotEditing,
    #[error("No add-skill prompt is pending; select the add row first")]
    NoPendingPrompt,
    #[error(transparent)]
    Store(#[from] ProfileError),
}
