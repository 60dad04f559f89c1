//! Storage Module Tests
//!
//! Validates snapshot conversion and the file-backed store.
//!
//! ## Test Scopes
//! - **Snapshot**: Conversion between the paired in-memory rosters and
//!   the four-field wire form, including repair of mismatched click maps.
//! - **SnapshotStore**: Save/load round-trips and fallback to the seed
//!   rosters on missing or corrupt files.

#[cfg(test)]
mod tests {
    use crate::roster::state::RotationState;
    use crate::roster::types::{RosterEntry, Table};
    use crate::storage::file::SnapshotStore;
    use crate::storage::snapshot::Snapshot;
    use std::collections::HashMap;

    fn diverged_state() -> RotationState {
        // Lists with different membership and nonzero counts, the shape
        // that emerges after independent deletes and rotations.
        let mut state = RotationState::seeded();
        state.add_name("ZETA");
        state.move_to_bottom(Table::Breakfast, "ZETA");
        state.move_to_bottom(Table::Breakfast, "KDTN");
        state.move_to_bottom(Table::Cleanup, "NIPS");
        state.breakfast.retain(|entry| entry.name != "MARA");
        state
    }

    // ============================================================
    // SNAPSHOT CONVERSION
    // ============================================================

    #[test]
    fn test_capture_mirrors_roster_membership() {
        let state = diverged_state();

        let snapshot = Snapshot::capture(&state);

        assert_eq!(snapshot.breakfast_names.len(), state.breakfast.len());
        assert_eq!(snapshot.breakfast_clicks.len(), state.breakfast.len());
        for entry in &state.breakfast {
            assert_eq!(snapshot.breakfast_clicks.get(&entry.name), Some(&entry.clicks));
        }
        assert_eq!(snapshot.cleanup_names.len(), state.cleanup.len());
        assert_eq!(snapshot.cleanup_clicks.len(), state.cleanup.len());
    }

    #[test]
    fn test_snapshot_state_roundtrip() {
        let state = diverged_state();

        let rebuilt = Snapshot::capture(&state).into_state();

        assert_eq!(rebuilt, state);
    }

    #[test]
    fn test_missing_click_entry_defaults_to_zero() {
        let snapshot = Snapshot {
            breakfast_names: vec!["AAAA".to_string(), "BBBB".to_string()],
            breakfast_clicks: HashMap::from([("AAAA".to_string(), 4)]),
            cleanup_names: vec![],
            cleanup_clicks: HashMap::new(),
        };

        let state = snapshot.into_state();

        assert_eq!(
            state.breakfast,
            vec![
                RosterEntry {
                    name: "AAAA".to_string(),
                    clicks: 4
                },
                RosterEntry {
                    name: "BBBB".to_string(),
                    clicks: 0
                },
            ]
        );
    }

    #[test]
    fn test_unlisted_click_entries_are_dropped() {
        let snapshot = Snapshot {
            breakfast_names: vec!["AAAA".to_string()],
            breakfast_clicks: HashMap::from([
                ("AAAA".to_string(), 1),
                ("GONE".to_string(), 9),
            ]),
            cleanup_names: vec![],
            cleanup_clicks: HashMap::new(),
        };

        let state = snapshot.into_state();

        assert_eq!(state.breakfast.len(), 1);
        assert_eq!(state.breakfast[0].name, "AAAA");
    }

    // ============================================================
    // FILE STORE
    // ============================================================

    #[tokio::test]
    async fn test_save_load_roundtrip_preserves_lists_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("rotation_data.json"));
        let state = diverged_state();

        store.save(&state).await;
        let loaded = store.load().await;

        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_load_missing_file_seeds_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("rotation_data.json"));

        let loaded = store.load().await;

        assert_eq!(loaded, RotationState::seeded());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_seeds_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotation_data.json");
        tokio::fs::write(&path, b"not json at all {{{").await.unwrap();

        let store = SnapshotStore::new(path);
        let loaded = store.load().await;

        assert_eq!(loaded, RotationState::seeded());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("rotation_data.json"));

        store.save(&RotationState::seeded()).await;
        let state = diverged_state();
        store.save(&state).await;

        let loaded = store.load().await;
        assert_eq!(loaded, state);
    }
}
