pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod snapshot;

pub use client::DataClient;
pub use render::DashboardView;
pub use snapshot::Snapshot;

use error::Result;

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Fetch one snapshot and repaint the view from it.
///
/// This is the single load operation hosts invoke once at startup: fetch,
/// parse, render. Any failure along the way is returned to the caller; the
/// view keeps whatever content it had before the call.
pub async fn load_data(client: &DataClient, view: &mut DashboardView) -> Result<()> {
    let snapshot = client.fetch_snapshot().await?;
    view.apply(&snapshot);
    tracing::info!(
        reflections = snapshot.reflections.len(),
        traits = snapshot.trait_cloud.len(),
        "dashboard view refreshed"
    );
    Ok(())
}
