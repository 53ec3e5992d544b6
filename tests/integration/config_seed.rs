use anyhow::Result;
use skillboard::config::{self, AppConfig};
use skillboard::ProfileStore;

use crate::IntegrationHarness;

#[test]
fn saved_config_seeds_the_store() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut cfg = AppConfig::default();
    cfg.seed.name = Some("Ada".into());
    cfg.seed.skills = Some(vec!["Rust".into(), "Swift".into()]);
    cfg.editing.history_limit = 1;
    let path = config::save(&cfg)?;
    assert!(path.starts_with(harness.workspace_path()));

    let loaded = config::load_from(&path)?;
    let mut store = ProfileStore::from_config(&loaded);
    assert_eq!(store.profile().name, "Ada");
    assert_eq!(store.skills(), ["Rust", "Swift"]);

    store.push_skill("Go")?;
    store.remove_skill(0)?;
    assert_eq!(store.history().count(), 1);
    Ok(())
}
