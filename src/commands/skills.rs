//! Text command bridge for the skill list.
//!
//! Converts one-line gesture intents into controller calls and user-facing
//! summaries. Row indices are zero-based, matching the row model.

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};

use crate::skills::{DisplayRow, RowSelection, SkillListController};

pub const ADD_ROW_LABEL: &str = "+ Add skill";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillCommand {
    Toggle,
    Select(usize),
    Delete(usize),
    Move { from: usize, to: usize },
    Add(String),
    Cancel,
    Show,
}

impl SkillCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb.to_ascii_lowercase().as_str() {
            "toggle" | "edit" | "done" => Ok(Self::Toggle),
            "select" => Ok(Self::Select(parse_index(rest, "select")?)),
            "delete" => Ok(Self::Delete(parse_index(rest, "delete")?)),
            "move" => {
                let mut parts = rest.split_whitespace();
                let from = parse_index(parts.next().unwrap_or_default(), "move")?;
                let to = parse_index(parts.next().unwrap_or_default(), "move")?;
                if parts.next().is_some() {
                    bail!("'move' expects exactly two row indices.");
                }
                Ok(Self::Move { from, to })
            }
            "add" => Ok(Self::Add(rest.to_string())),
            "cancel" => Ok(Self::Cancel),
            "show" | "" => Ok(Self::Show),
            other => bail!(
                "Unknown command '{other}'. Expected toggle/select/delete/move/add/cancel/show."
            ),
        }
    }
}

fn parse_index(raw: &str, verb: &str) -> Result<usize> {
    if raw.is_empty() {
        bail!("'{verb}' expects a row index.");
    }
    raw.parse::<usize>()
        .with_context(|| format!("'{raw}' is not a valid row index for '{verb}'"))
}

pub struct SkillCommandBridge<'a> {
    controller: &'a mut SkillListController,
}

impl<'a> SkillCommandBridge<'a> {
    pub fn new(controller: &'a mut SkillListController) -> Self {
        Self { controller }
    }

    pub fn execute_line(&mut self, line: &str) -> Result<String> {
        let command = SkillCommand::parse(line)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: SkillCommand) -> Result<String> {
        match command {
            SkillCommand::Toggle => {
                let state = self.controller.toggle_edit();
                Ok(format!(
                    "Mode: {:?} (button: {})\n{}",
                    state,
                    self.controller.edit_button_title(),
                    format_rows(&self.controller.rows())
                ))
            }
            SkillCommand::Select(index) => match self.controller.select_row(index) {
                RowSelection::PromptForSkill => {
                    Ok("Enter the new skill with 'add <text>' or 'cancel'.".into())
                }
                RowSelection::Ignored => Ok(format!("Row {index} has no action.")),
            },
            SkillCommand::Delete(index) => {
                let removed = self
                    .controller
                    .delete_row(index)
                    .with_context(|| format!("Failed to delete row {index}"))?;
                Ok(format!(
                    "Removed '{removed}'.\n{}",
                    format_rows(&self.controller.rows())
                ))
            }
            SkillCommand::Move { from, to } => {
                self.controller
                    .move_row(from, to)
                    .with_context(|| format!("Failed to move row {from} to {to}"))?;
                Ok(self.format_change())
            }
            SkillCommand::Add(text) => {
                self.controller
                    .confirm_new_skill(&text)
                    .context("Failed to add skill")?;
                Ok(self.format_change())
            }
            SkillCommand::Cancel => {
                self.controller.cancel_prompt();
                Ok("Add skill cancelled.".into())
            }
            SkillCommand::Show => Ok(format_show(&*self.controller)),
        }
    }

    fn format_change(&self) -> String {
        let summary = self
            .controller
            .store()
            .borrow()
            .last_change()
            .map(|event| event.diff_summary.join("\n"))
            .unwrap_or_else(|| "No changes.".into());
        format!("{summary}\n{}", format_rows(&self.controller.rows()))
    }
}

pub fn format_rows(rows: &[DisplayRow]) -> String {
    if rows.is_empty() {
        return "(no skills)".into();
    }
    rows.iter()
        .enumerate()
        .map(|(index, row)| match row {
            DisplayRow::Skill { text } => format!("{index}. {text}"),
            DisplayRow::AddAffordance => format!("{index}. {ADD_ROW_LABEL}"),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// JSON view of the screen: header, mode, revision and rows.
pub fn snapshot_json(controller: &SkillListController) -> Value {
    json!({
        "header": controller.header(),
        "state": controller.state(),
        "revision": controller.revision(),
        "rows": controller.rows(),
    })
}

fn format_show(controller: &SkillListController) -> String {
    let header = controller.header();
    let mut lines = vec![format!("Photo: {}", header.photo_reference)];
    lines.extend(
        header
            .fields()
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}")),
    );
    lines.push(format!("Skills ({:?}):", controller.state()));
    lines.push(format_rows(&controller.rows()));
    lines.join("\n")
}
