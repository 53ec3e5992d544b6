use skillboard::ProfileError;

use crate::support::skill_fixture::store_with;

const BASE: &[&str] = &["A", "B", "C", "D", "E"];

#[test]
fn move_then_move_back_restores_order() {
    for i in 0..BASE.len() {
        for j in 0..BASE.len() {
            let mut store = store_with(BASE);
            store.move_skill(i, j).unwrap();
            store.move_skill(j, i).unwrap();
            assert_eq!(store.skills(), BASE, "round trip {i} -> {j} -> {i}");
        }
    }
}

#[test]
fn remove_then_reinsert_restores_order() {
    for i in 0..BASE.len() {
        let mut store = store_with(BASE);
        let removed = store.remove_skill(i).unwrap();
        store.insert_skill(&removed, i).unwrap();
        assert_eq!(store.skills(), BASE);
    }
}

#[test]
fn blank_insert_keeps_length() {
    let mut store = store_with(BASE);
    for i in 0..=BASE.len() {
        let before = store.skill_count();
        assert!(matches!(
            store.insert_skill("", i),
            Err(ProfileError::InvalidInput(_))
        ));
        assert_eq!(store.skill_count(), before);
    }
}

#[test]
fn out_of_range_remove_and_move_fail_for_any_size() {
    for size in 0..=BASE.len() {
        let mut store = store_with(&BASE[..size]);
        let hash = store.skills_hash();
        assert_eq!(
            store.remove_skill(size),
            Err(ProfileError::InvalidIndex {
                index: size,
                len: size
            })
        );
        assert!(matches!(
            store.move_skill(0, size + 1),
            Err(ProfileError::InvalidIndex { .. })
        ));
        assert_eq!(store.skills_hash(), hash);
        assert_eq!(store.revision(), 0);
    }
}

#[test]
fn revision_counts_successful_mutations_only() {
    let mut store = store_with(&["A"]);
    store.push_skill("B").unwrap();
    assert!(store.push_skill(" ").is_err());
    store.move_skill(0, 1).unwrap();
    assert!(store.remove_skill(9).is_err());
    store.remove_skill(0).unwrap();
    assert_eq!(store.revision(), 3);
    assert_eq!(store.history().count(), 3);
}
