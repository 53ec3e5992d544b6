use skillboard::{ProfileStore, SharedProfileStore, SkillListController};

pub struct SkillFixture {
    pub store: SharedProfileStore,
    pub controller: SkillListController,
}

impl SkillFixture {
    pub fn with_skills(skills: &[&str]) -> Self {
        let store = store_with(skills).into_shared();
        let controller = SkillListController::new(store.clone());
        Self { store, controller }
    }

    pub fn skills(&self) -> Vec<String> {
        self.store.borrow().skills().to_vec()
    }
}

pub fn store_with(skills: &[&str]) -> ProfileStore {
    ProfileStore::with_skills(skills.iter().copied())
}
