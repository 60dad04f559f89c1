//! Rotation Roster Module
//!
//! The core domain of the service: two ordered rosters (breakfast and
//! cleanup) whose entries carry a per-table click count.
//!
//! ## Responsibilities
//! - **State**: `RotationState` owns both rosters and implements the four
//!   mutating operations with their silent no-op branches.
//! - **View**: Renders the board page showing both rosters in rotation
//!   order with current counts.
//! - **API**: Exposes the view and the mutations over HTTP via the Axum
//!   handlers in `handlers`.
//!
//! ## Submodules
//! - **`state`**: In-memory rotation state and operations.
//! - **`handlers`**: HTTP request handlers and the router.
//! - **`view`**: HTML rendering for the board page.
//! - **`types`**: Table selector, roster entry, and operation outcome types.

pub mod handlers;
pub mod state;
pub mod types;
pub mod view;
