//! Rotation Roster Service Library
//!
//! This library crate defines the modules behind the rotation board web
//! application served by the binary (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of two coupled subsystems:
//!
//! - **`roster`**: The rotation-list domain. Holds the two named rosters
//!   (breakfast and cleanup), implements the four mutating operations
//!   (add, move-to-bottom, delete, reset-counts), renders the board page,
//!   and exposes everything over HTTP via Axum handlers.
//! - **`storage`**: The persistence layer. Serializes the full rotation
//!   state to a single snapshot file after every mutation and reloads it
//!   at startup, falling back to built-in seed rosters when the file is
//!   missing or unreadable.

pub mod roster;
pub mod storage;
