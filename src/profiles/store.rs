//! Single source of truth for the profile record.
//!
//! Every skill mutation is validated here and recorded as a
//! [`SkillChangeEvent`]. Consumers share one store through
//! [`SharedProfileStore`] and never keep their own copy of the profile.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use sha2::{Digest, Sha256};

use crate::config::{AppConfig, EditingSettings};

use super::defaults::{default_profile, seeded_profile};
use super::error::{ProfileError, ProfileResult};
use super::model::{Profile, SkillChangeEvent, SkillChangeKind};

/// Handle injected into every consumer of the profile (single-threaded).
pub type SharedProfileStore = Rc<RefCell<ProfileStore>>;

#[derive(Debug)]
pub struct ProfileStore {
    profile: Profile,
    revision: u64,
    history: VecDeque<SkillChangeEvent>,
    history_limit: usize,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self::with_settings(profile, &EditingSettings::default())
    }

    /// Built-in seed profile with `skills` in place of the seeded list.
    pub fn with_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut profile = default_profile();
        profile.skills = skills.into_iter().map(Into::into).collect();
        Self::new(profile)
    }

    pub fn with_settings(profile: Profile, settings: &EditingSettings) -> Self {
        Self {
            profile,
            revision: 0,
            history: VecDeque::new(),
            history_limit: settings.history_limit,
        }
    }

    /// Seeds the store from configuration, falling back to the built-in profile.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_settings(seeded_profile(&config.seed), &config.editing)
    }

    pub fn into_shared(self) -> SharedProfileStore {
        Rc::new(RefCell::new(self))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn snapshot(&self) -> Profile {
        self.profile.clone()
    }

    pub fn skills(&self) -> &[String] {
        &self.profile.skills
    }

    pub fn skill_count(&self) -> usize {
        self.profile.skills.len()
    }

    /// Incremented once per successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Recent mutations, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &SkillChangeEvent> {
        self.history.iter()
    }

    pub fn last_change(&self) -> Option<&SkillChangeEvent> {
        self.history.back()
    }

    pub fn insert_skill(&mut self, text: &str, at: usize) -> ProfileResult<()> {
        let skill = text.trim();
        if skill.is_empty() {
            log::warn!("rejected blank skill insert at {}", at);
            return Err(ProfileError::InvalidInput(
                "skill text must not be blank".into(),
            ));
        }
        let len = self.skill_count();
        if at > len {
            log::warn!("rejected skill insert at {} (len {})", at, len);
            return Err(ProfileError::InvalidIndex { index: at, len });
        }
        let hash_before = self.skills_hash();
        self.profile.skills.insert(at, skill.to_string());
        log::debug!("inserted skill '{}' at {}", skill, at);
        let event = SkillChangeEvent::new(SkillChangeKind::Insert, hash_before, self.skills_hash())
            .with_summary(format!("Added '{}' at position {}", skill, at + 1));
        self.record(event);
        Ok(())
    }

    pub fn push_skill(&mut self, text: &str) -> ProfileResult<()> {
        self.insert_skill(text, self.skill_count())
    }

    /// Removes the skill at `at` and returns its text.
    pub fn remove_skill(&mut self, at: usize) -> ProfileResult<String> {
        self.check_index(at)?;
        let hash_before = self.skills_hash();
        let removed = self.profile.skills.remove(at);
        log::debug!("removed skill '{}' from {}", removed, at);
        let event = SkillChangeEvent::new(SkillChangeKind::Remove, hash_before, self.skills_hash())
            .with_summary(format!("Removed '{}' from position {}", removed, at + 1));
        self.record(event);
        Ok(removed)
    }

    /// Takes the skill at `from` out and reinserts it at `to`.
    ///
    /// Both indices are validated against the list as it is before the move,
    /// so a drag from `from` to `to` leaves the dragged skill at position `to`.
    pub fn move_skill(&mut self, from: usize, to: usize) -> ProfileResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let hash_before = self.skills_hash();
        let skill = self.profile.skills.remove(from);
        self.profile.skills.insert(to, skill.clone());
        log::debug!("moved skill '{}' from {} to {}", skill, from, to);
        let event = SkillChangeEvent::new(SkillChangeKind::Move, hash_before, self.skills_hash())
            .with_summary(format!(
                "Moved '{}' from position {} to {}",
                skill,
                from + 1,
                to + 1
            ));
        self.record(event);
        Ok(())
    }

    /// Lowercase hex SHA-256 of the canonical skill list.
    pub fn skills_hash(&self) -> String {
        compute_hash(&canonical_skills(&self.profile.skills))
    }

    fn check_index(&self, index: usize) -> ProfileResult<()> {
        let len = self.skill_count();
        if index >= len {
            log::warn!("rejected skill index {} (len {})", index, len);
            return Err(ProfileError::InvalidIndex { index, len });
        }
        Ok(())
    }

    fn record(&mut self, event: SkillChangeEvent) {
        self.revision += 1;
        self.history.push_back(event);
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(default_profile())
    }
}

/// Length-prefixed concatenation, so element boundaries are unambiguous.
fn canonical_skills(skills: &[String]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for skill in skills {
        bytes.extend_from_slice(&(skill.len() as u64).to_le_bytes());
        bytes.extend_from_slice(skill.as_bytes());
    }
    bytes
}

fn compute_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
