//! Profile record and the store that owns it.

pub mod defaults;
pub mod error;
pub mod model;
pub mod store;
pub mod summarize;

pub use error::{ProfileError, ProfileResult};
pub use model::{Profile, SkillChangeEvent, SkillChangeKind};
pub use store::{ProfileStore, SharedProfileStore};
pub use summarize::ProfileHeader;
