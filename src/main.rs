use rotation_roster::roster::handlers::{AppState, router};
use rotation_roster::storage::file::SnapshotStore;
use std::net::SocketAddr;
use std::sync::Arc;

/// Snapshot file lives in the working directory; only this process
/// reads or writes it.
const DATA_FILE: &str = "rotation_data.json";

const DEFAULT_PORT: u16 = 7153;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Load persisted state (or seed defaults):
    let store = SnapshotStore::new(DATA_FILE);
    let rotation = store.load().await;
    tracing::info!(
        "Loaded rotations: {} breakfast entries, {} cleanup entries",
        rotation.breakfast.len(),
        rotation.cleanup.len()
    );

    // 2. Shared state + HTTP router:
    let app_state = Arc::new(AppState::new(rotation, store));
    let app = router(app_state);

    // 3. Start HTTP server:
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
