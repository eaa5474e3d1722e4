//! Console state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::{AppState, Overlay};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub page_index: usize,
    pub welcome_dismissed: bool,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        page_index: app.view.page_index,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState. A page beyond the current fleet is
/// pulled back to the last page.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.view.page_index = state.page_index;
    app.view.clamp_page(app.snapshot.resources.len());
    app.overlay = if state.welcome_dismissed {
        Overlay::None
    } else {
        Overlay::Welcome
    };
}
