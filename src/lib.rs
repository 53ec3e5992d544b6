pub mod commands;
pub mod config;
pub mod profiles;
pub mod skills;

// Re-export commonly used types for convenience.
pub use config::AppConfig;
pub use profiles::{Profile, ProfileError, ProfileStore, SharedProfileStore};
pub use skills::{ControllerError, DisplayRow, EditState, SkillListController};
