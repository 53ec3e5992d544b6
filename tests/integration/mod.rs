use std::env;
use std::path::Path;

use skillboard::config::HOME_ENV_VAR;
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        env::set_var(HOME_ENV_VAR, workspace.path());
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }
}

mod command_bridge;
mod config_seed;
mod profile_store_laws;
