use anyhow::Result;
use std::path::{Path, PathBuf};

use super::snapshot::Snapshot;
use crate::roster::state::RotationState;

/// File-backed snapshot store. One process owns the file; every mutation
/// overwrites it wholesale with the full serialized state.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted snapshot, falling back to the built-in seed
    /// rosters when the file is missing, unreadable, or fails to
    /// deserialize. Never fails the caller.
    pub async fn load(&self) -> RotationState {
        if !self.path.exists() {
            tracing::info!(
                "No snapshot at {}, seeding default rotations",
                self.path.display()
            );
            return RotationState::seeded();
        }

        match self.try_load().await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("Failed to load snapshot from {}: {}", self.path.display(), e);
                RotationState::seeded()
            }
        }
    }

    async fn try_load(&self) -> Result<RotationState> {
        let bytes = tokio::fs::read(&self.path).await?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        Ok(snapshot.into_state())
    }

    /// Persists the full state. Failures are logged, not propagated: the
    /// in-memory state stays authoritative and the previous on-disk
    /// snapshot remains in place until the next successful save.
    pub async fn save(&self, state: &RotationState) {
        if let Err(e) = self.try_save(state).await {
            tracing::error!("Failed to save snapshot to {}: {}", self.path.display(), e);
        }
    }

    async fn try_save(&self, state: &RotationState) -> Result<()> {
        let json = serde_json::to_vec_pretty(&Snapshot::capture(state))?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
