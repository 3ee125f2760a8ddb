//! Shared test support for the SafeZone workspace: JSON fixture loading,
//! in-memory collaborators, a scriptable push channel, and point generators.

pub mod generators;
pub mod push;
pub mod stores;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use safezone_core::models::{CasePoint, Zone};

pub use push::ScriptedPushChannel;
pub use stores::{InMemoryNotificationStore, InMemoryPointStore};

/// A case scenario: a point snapshot plus the zones around it.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseFixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub points: Vec<CasePoint>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

/// Root directory of the fixture data shipped with this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a case scenario from `cases/`.
pub fn load_case_fixture(name: &str) -> CaseFixture {
    load_fixture(&format!("cases/{name}.json"))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}
