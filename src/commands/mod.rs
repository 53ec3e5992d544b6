//! Text command front end used by the console binary and integration tests.

pub mod skills;

pub use skills::{format_rows, snapshot_json, SkillCommand, SkillCommandBridge};
