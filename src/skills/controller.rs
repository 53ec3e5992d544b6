//! Edit-mode state machine over the shared profile store.
//!
//! The controller never holds skill data itself; every read goes to the
//! store so rows always reflect the latest successful mutation.

use std::cell::Ref;

use crate::profiles::{Profile, ProfileHeader, SharedProfileStore};

use super::error::{ControllerError, ControllerResult};
use super::rows::{DisplayRow, EditState, RowSelection};

pub const EDIT_BUTTON_TITLE: &str = "Edit";
pub const DONE_BUTTON_TITLE: &str = "Done";

pub struct SkillListController {
    store: SharedProfileStore,
    state: EditState,
    prompt_pending: bool,
}

impl SkillListController {
    pub fn new(store: SharedProfileStore) -> Self {
        Self {
            store,
            state: EditState::Viewing,
            prompt_pending: false,
        }
    }

    pub fn store(&self) -> &SharedProfileStore {
        &self.store
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt_pending
    }

    pub fn toggle_edit(&mut self) -> EditState {
        self.state = self.state.toggled();
        self.prompt_pending = false;
        log::debug!("skill list switched to {:?}", self.state);
        self.state
    }

    pub fn edit_button_title(&self) -> &'static str {
        match self.state {
            EditState::Viewing => EDIT_BUTTON_TITLE,
            EditState::Editing => DONE_BUTTON_TITLE,
        }
    }

    pub fn header(&self) -> ProfileHeader {
        ProfileHeader::from_profile(&self.profile())
    }

    pub fn revision(&self) -> u64 {
        self.store.borrow().revision()
    }

    pub fn row_count(&self) -> usize {
        let skills = self.skill_count();
        match self.state {
            EditState::Viewing => skills,
            EditState::Editing => skills + 1,
        }
    }

    pub fn row_at(&self, index: usize) -> ControllerResult<DisplayRow> {
        let profile = self.profile();
        let len = profile.skills.len();
        if let Some(text) = profile.skills.get(index) {
            return Ok(DisplayRow::skill(text.as_str()));
        }
        if self.is_editing() && index == len {
            return Ok(DisplayRow::AddAffordance);
        }
        Err(ControllerError::IndexOutOfRange {
            index,
            rows: self.row_count(),
        })
    }

    pub fn rows(&self) -> Vec<DisplayRow> {
        let mut rows: Vec<DisplayRow> = self
            .profile()
            .skills
            .iter()
            .map(|text| DisplayRow::skill(text.as_str()))
            .collect();
        if self.is_editing() {
            rows.push(DisplayRow::AddAffordance);
        }
        rows
    }

    pub fn can_reorder(&self, index: usize) -> bool {
        self.is_editing() && index < self.skill_count()
    }

    pub fn can_delete(&self, index: usize) -> bool {
        self.can_reorder(index)
    }

    pub fn select_row(&mut self, index: usize) -> RowSelection {
        if self.is_editing() && index == self.skill_count() {
            self.prompt_pending = true;
            RowSelection::PromptForSkill
        } else {
            RowSelection::Ignored
        }
    }

    /// Appends the text the user entered in the add-skill prompt.
    ///
    /// Only valid after `select_row` hit the add row while editing.
    pub fn confirm_new_skill(&mut self, text: &str) -> ControllerResult<()> {
        if !self.prompt_pending {
            log::warn!("new skill confirmed without a pending prompt");
            return Err(ControllerError::NoPendingPrompt);
        }
        self.prompt_pending = false;
        self.store.borrow_mut().push_skill(text)?;
        Ok(())
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt_pending = false;
    }

    /// Deletes the skill row at `index` and returns its text.
    pub fn delete_row(&mut self, index: usize) -> ControllerResult<String> {
        self.require_editing()?;
        let removed = self.store.borrow_mut().remove_skill(index)?;
        Ok(removed)
    }

    pub fn move_row(&mut self, from: usize, to: usize) -> ControllerResult<()> {
        self.require_editing()?;
        self.store.borrow_mut().move_skill(from, to)?;
        Ok(())
    }

    fn require_editing(&self) -> ControllerResult<()> {
        if self.is_editing() {
            Ok(())
        } else {
            log::warn!("skill mutation requested outside edit mode");
            Err(ControllerError::NotEditing)
        }
    }

    fn profile(&self) -> Ref<'_, Profile> {
        Ref::map(self.store.borrow(), |store| store.profile())
    }

    fn skill_count(&self) -> usize {
        self.store.borrow().skill_count()
    }
}
