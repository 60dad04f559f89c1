use axum::extract::Extension;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::state::RotationState;
use super::types::{MutationOutcome, Table};
use super::view;
use crate::storage::file::SnapshotStore;

/// Shared application state: the rotation rosters behind a single lock,
/// plus the snapshot store. The lock is held across the whole
/// mutate-then-persist sequence, so handlers are atomic with respect to
/// each other.
pub struct AppState {
    pub rotation: Mutex<RotationState>,
    pub store: SnapshotStore,
}

impl AppState {
    pub fn new(rotation: RotationState, store: SnapshotStore) -> Self {
        Self {
            rotation: Mutex::new(rotation),
            store,
        }
    }
}

#[derive(Deserialize)]
pub struct AddNameForm {
    pub name: String,
}

#[derive(Deserialize)]
pub struct MoveToBottomForm {
    pub name: String,
    pub table_type: String,
}

#[derive(Deserialize)]
pub struct DeleteNameForm {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ResetCountsForm {
    pub table_type: String,
}

pub fn router(app: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/add_name", post(handle_add_name))
        .route("/move_to_bottom", post(handle_move_to_bottom))
        .route("/delete_name", post(handle_delete_name))
        .route("/reset_counts", post(handle_reset_counts))
        .layer(Extension(app))
}

pub async fn handle_index(Extension(app): Extension<Arc<AppState>>) -> Html<String> {
    let rotation = app.rotation.lock().await;
    Html(view::render_page(&rotation))
}

pub async fn handle_add_name(
    Extension(app): Extension<Arc<AppState>>,
    Form(form): Form<AddNameForm>,
) -> Redirect {
    let mut rotation = app.rotation.lock().await;

    match rotation.add_name(&form.name) {
        MutationOutcome::Applied => {
            tracing::info!("Added {:?} to both rotations", form.name.trim().to_uppercase());
        }
        MutationOutcome::NoOp => {
            tracing::debug!("Ignored add for {:?} (empty or already present)", form.name);
        }
    }

    app.store.save(&rotation).await;
    Redirect::to("/")
}

pub async fn handle_move_to_bottom(
    Extension(app): Extension<Arc<AppState>>,
    Form(form): Form<MoveToBottomForm>,
) -> Redirect {
    let mut rotation = app.rotation.lock().await;

    let outcome = match Table::parse(&form.table_type) {
        Some(table) => rotation.move_to_bottom(table, &form.name),
        None => MutationOutcome::NoOp,
    };
    match outcome {
        MutationOutcome::Applied => {
            tracing::info!("Rotated {:?} to bottom of {}", form.name, form.table_type);
        }
        MutationOutcome::NoOp => {
            tracing::debug!(
                "Ignored rotate for {:?} in {:?} (unknown table or name)",
                form.name,
                form.table_type
            );
        }
    }

    app.store.save(&rotation).await;
    Redirect::to("/")
}

pub async fn handle_delete_name(
    Extension(app): Extension<Arc<AppState>>,
    Form(form): Form<DeleteNameForm>,
) -> Redirect {
    let mut rotation = app.rotation.lock().await;

    match rotation.delete_name(&form.name) {
        MutationOutcome::Applied => {
            tracing::info!("Deleted {:?} from the rotations", form.name);
        }
        MutationOutcome::NoOp => {
            tracing::debug!("Ignored delete for {:?} (not present)", form.name);
        }
    }

    app.store.save(&rotation).await;
    Redirect::to("/")
}

pub async fn handle_reset_counts(
    Extension(app): Extension<Arc<AppState>>,
    Form(form): Form<ResetCountsForm>,
) -> Redirect {
    let mut rotation = app.rotation.lock().await;

    let outcome = match Table::parse(&form.table_type) {
        Some(table) => rotation.reset_counts(table),
        None => MutationOutcome::NoOp,
    };
    match outcome {
        MutationOutcome::Applied => {
            tracing::info!("Reset counts for {}", form.table_type);
        }
        MutationOutcome::NoOp => {
            tracing::debug!("Ignored reset for unknown table {:?}", form.table_type);
        }
    }

    app.store.save(&rotation).await;
    Redirect::to("/")
}
