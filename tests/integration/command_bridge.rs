use anyhow::Result;
use serde_json::json;
use skillboard::commands::{snapshot_json, SkillCommandBridge};
use skillboard::config;
use skillboard::{ProfileStore, SkillListController};
use tempfile::TempDir;

use crate::support::skill_fixture::SkillFixture;

#[test]
fn add_skill_through_prompt_flow() -> Result<()> {
    let mut fixture = SkillFixture::with_skills(&["UIKit"]);
    {
        let mut bridge = SkillCommandBridge::new(&mut fixture.controller);
        let toggled = bridge.execute_line("toggle")?;
        assert!(toggled.contains("button: Done"), "{toggled}");
        assert!(toggled.contains("1. + Add skill"), "{toggled}");

        let prompt = bridge.execute_line("select 1")?;
        assert!(prompt.contains("add <text>"), "{prompt}");

        let added = bridge.execute_line("add SwiftUI")?;
        assert!(added.contains("Added 'SwiftUI' at position 2"), "{added}");
        assert!(added.contains("2. + Add skill"), "{added}");
    }
    assert_eq!(fixture.skills(), ["UIKit", "SwiftUI"]);
    Ok(())
}

#[test]
fn add_without_prompt_is_rejected() -> Result<()> {
    let mut fixture = SkillFixture::with_skills(&["UIKit"]);
    let mut bridge = SkillCommandBridge::new(&mut fixture.controller);
    bridge.execute_line("toggle")?;
    assert!(bridge.execute_line("add Rust").is_err());
    bridge.execute_line("select 1")?;
    bridge.execute_line("cancel")?;
    assert!(bridge.execute_line("add Rust").is_err());
    drop(bridge);
    assert_eq!(fixture.skills(), ["UIKit"]);
    Ok(())
}

#[test]
fn errors_carry_row_context() -> Result<()> {
    let mut fixture = SkillFixture::with_skills(&["A", "B"]);
    let mut bridge = SkillCommandBridge::new(&mut fixture.controller);

    let err = bridge.execute_line("delete 0").unwrap_err();
    assert!(format!("{err:#}").contains("edit mode"), "{err:#}");

    bridge.execute_line("toggle")?;
    let err = bridge.execute_line("move 0 2").unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to move row 0 to 2"), "{message}");
    assert!(message.contains("out of bounds"), "{message}");

    let moved = bridge.execute_line("move 0 1")?;
    assert!(moved.contains("Moved 'A' from position 1 to 2"), "{moved}");
    Ok(())
}

#[test]
fn show_lists_header_and_rows() -> Result<()> {
    let mut fixture = SkillFixture::with_skills(&[]);
    let mut bridge = SkillCommandBridge::new(&mut fixture.controller);
    let output = bridge.execute_line("show")?;
    assert!(output.contains("Photo: Photo"), "{output}");
    assert!(output.contains("Location: Podgorica"), "{output}");
    assert!(output.contains("(no skills)"), "{output}");
    Ok(())
}

#[test]
fn configured_session_exports_json_snapshot() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join(config::CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "[seed]\nname = \"Ada\"\nphoto_reference = \"ada.png\"\nskills = [\"Rust\", \"Swift\"]\n",
    )?;
    let cfg = config::load_from(&path)?;
    let mut controller = SkillListController::new(ProfileStore::from_config(&cfg).into_shared());
    {
        let mut bridge = SkillCommandBridge::new(&mut controller);
        for line in ["toggle", "move 1 0", "select 2", "add Go"] {
            bridge.execute_line(line)?;
        }
    }

    let payload = snapshot_json(&controller);
    assert_eq!(payload["header"]["name"], "Ada");
    assert_eq!(payload["header"]["photo_reference"], "ada.png");
    assert_eq!(payload["state"], "editing");
    assert_eq!(payload["revision"], 2);
    assert_eq!(
        payload["rows"],
        json!([
            {"kind": "skill", "text": "Swift"},
            {"kind": "skill", "text": "Rust"},
            {"kind": "skill", "text": "Go"},
            {"kind": "add_affordance"},
        ])
    );
    Ok(())
}
