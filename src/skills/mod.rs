//! Editable skill list: edit mode, row model and gesture handling.

pub mod controller;
pub mod error;
pub mod rows;

pub use controller::SkillListController;
pub use error::{ControllerError, ControllerResult};
pub use rows::{DisplayRow, EditState, RowSelection};
