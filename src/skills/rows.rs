use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditState {
    #[default]
    Viewing,
    Editing,
}

impl EditState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Viewing => Self::Editing,
            Self::Editing => Self::Viewing,
        }
    }
}

/// A row the presentation layer renders, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    Skill { text: String },
    /// Trailing "add skill" row, present only while editing.
    AddAffordance,
}

impl DisplayRow {
    pub fn skill(text: impl Into<String>) -> Self {
        Self::Skill { text: text.into() }
    }

    pub fn skill_text(&self) -> Option<&str> {
        match self {
            Self::Skill { text } => Some(text),
            Self::AddAffordance => None,
        }
    }

    pub fn is_add_affordance(&self) -> bool {
        matches!(self, Self::AddAffordance)
    }
}

/// What the presentation layer should do after a row tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSelection {
    /// Ask the user for the new skill text, then call `confirm_new_skill`.
    PromptForSkill,
    Ignored,
}
