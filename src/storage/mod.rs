//! Snapshot Storage Module
//!
//! Persists the full rotation state as a single snapshot file.
//!
//! ## Core Concepts
//! - **Snapshot**: The wire form of the state — ordered name lists plus
//!   name-to-count maps, one pair per table — written as one JSON blob.
//! - **Store**: `SnapshotStore` reads the snapshot once at startup and
//!   overwrites it after every mutation.
//! - **Degradation**: A missing or corrupt file yields the built-in seed
//!   rosters; a failed save is logged and the process keeps serving from
//!   memory.

pub mod file;
pub mod snapshot;

#[cfg(test)]
mod tests;
